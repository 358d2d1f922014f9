//! Link solver: answers a URL with its cleaned form, an "Open" button and a preview of that URL.

use crate::normalize::canonical_url;
use answer_core::{Answer, Button, Keyboard, LinkPreview, Result, Solver};
use async_trait::async_trait;

/// Label of the URL button attached to link answers.
pub const OPEN_BUTTON_LABEL: &str = "Open";

/// [`Solver`] for URL-shaped text. Expects normalized input but canonicalizes again, which is a no-op then.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkSolver;

impl LinkSolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Solver for LinkSolver {
    async fn solve(&self, text: &str) -> Result<Option<Answer>> {
        Ok(canonical_url(text).map(|url| {
            Answer::new(url.clone())
                .with_keyboard(Keyboard::single(Button::url(OPEN_BUTTON_LABEL, url.clone())))
                .with_link_preview(LinkPreview::for_url(url))
        }))
    }
}
