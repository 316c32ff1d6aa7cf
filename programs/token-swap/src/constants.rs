/// Bytes reserved at the front of every Anchor account for its discriminator.
pub const ANCHOR_DISCRIMINATOR: u8 = 8;
