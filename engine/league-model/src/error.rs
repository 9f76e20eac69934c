//! Error types for league model construction

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Flex slot '{slot}' has no entry in the slot counts")]
    FlexSlotWithoutCount { slot: String },

    #[error("Flex slot '{slot}' appears as a base position of flex group '{group}'")]
    NestedFlexSlot { slot: String, group: String },
}
