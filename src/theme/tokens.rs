use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui::Color32;

use super::registry::ThemeColors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenName {
    Primary,
    DomainA,
    DomainB,
    DomainC,
}

impl TokenName {
    pub const ALL: [TokenName; 4] = [
        TokenName::Primary,
        TokenName::DomainA,
        TokenName::DomainB,
        TokenName::DomainC,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::DomainA => "domain-a",
            Self::DomainB => "domain-b",
            Self::DomainC => "domain-c",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleTokens {
    pub primary: Color32,
    pub domain_a: Color32,
    pub domain_b: Color32,
    pub domain_c: Color32,
}

impl StyleTokens {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        Self {
            primary: colors.primary,
            domain_a: colors.domain_a,
            domain_b: colors.domain_b,
            domain_c: colors.domain_c,
        }
    }

    pub fn get(&self, name: TokenName) -> Color32 {
        match name {
            TokenName::Primary => self.primary,
            TokenName::DomainA => self.domain_a,
            TokenName::DomainB => self.domain_b,
            TokenName::DomainC => self.domain_c,
        }
    }
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            primary: Color32::GRAY,
            domain_a: Color32::GRAY,
            domain_b: Color32::GRAY,
            domain_c: Color32::GRAY,
        }
    }
}

#[derive(Debug, Default)]
struct TokenSlot {
    tokens: StyleTokens,
    revision: u64,
}

/// Shared, readable token channel. Every clone observes the same tokens;
/// only the theme controller publishes.
#[derive(Clone, Debug, Default)]
pub struct SharedTokens {
    slot: Rc<RefCell<TokenSlot>>,
}

impl SharedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> StyleTokens {
        self.slot.borrow().tokens
    }

    pub fn get(&self, name: TokenName) -> Color32 {
        self.slot.borrow().tokens.get(name)
    }

    /// Bumped on every publish; 0 means nothing was published yet.
    pub fn revision(&self) -> u64 {
        self.slot.borrow().revision
    }

    pub(super) fn publish(&self, tokens: StyleTokens) {
        let mut slot = self.slot.borrow_mut();
        slot.tokens = tokens;
        slot.revision = slot.revision.wrapping_add(1);
    }
}
