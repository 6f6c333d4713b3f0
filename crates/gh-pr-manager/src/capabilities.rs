//! View capability system
//!
//! Views declare what kind of input they handle, so the keyboard middleware
//! can route keys by capability instead of by concrete view.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ViewCapabilities: u32 {
        /// View consumes typed characters (search fields, message inputs)
        const TEXT_INPUT = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;

        /// View can scroll vertically
        const SCROLL_VERTICAL = 1 << 2;
    }
}

impl ViewCapabilities {
    /// Check if view routes characters to a text field
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if view supports next/previous item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}
