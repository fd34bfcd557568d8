//! Recording display elements for integration tests.

use signalinfo::display::{DisplaySlot, TaggedSlot};

pub struct FakeSlot {
    pub id: Option<&'static str>,
    pub text: String,
}

impl FakeSlot {
    pub fn named(id: &'static str) -> FakeSlot {
        FakeSlot {
            id: Some(id),
            text: "N/A".to_string(),
        }
    }

    pub fn anonymous() -> FakeSlot {
        FakeSlot {
            id: None,
            text: "N/A".to_string(),
        }
    }
}

impl DisplaySlot for FakeSlot {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl TaggedSlot for FakeSlot {
    fn identifier(&self) -> Option<&str> {
        self.id
    }
}
