//! Identikit (character appearance kit) entry decoding.
//!
//! # Format
//!
//! `u16` entry count, then per entry a sequence of tagged fields ended by
//! tag 0:
//!
//! | tag | payload | field |
//! |---|---|---|
//! | 1 | `u8` | body part |
//! | 2 | `u8` count, count × `u16` | body model ids |
//! | 3 | none | disabled |
//! | 40-49 | `u16` | source color slot `tag - 40` |
//! | 50-59 | `u16` | target color slot `tag - 50` |
//! | 60-69 | `u16` | head model slot `tag - 60` |

use crate::buffer::Buffer;
use crate::error::{DecodeError, DecodeResult};

/// Number of recolor slots per kit.
pub const RECOLOR_SLOTS: usize = 6;
/// Number of head model slots per kit.
pub const HEAD_MODEL_SLOTS: usize = 5;
/// Number of distinct body parts per gender.
pub const BODY_PARTS_PER_GENDER: u8 = 7;

/// Which part of a character a kit dresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Jaw,
    Torso,
    Arms,
    Hands,
    Legs,
    Feet,
}

impl BodyPart {
    pub const ALL: [BodyPart; BODY_PARTS_PER_GENDER as usize] = [
        BodyPart::Head,
        BodyPart::Jaw,
        BodyPart::Torso,
        BodyPart::Arms,
        BodyPart::Hands,
        BodyPart::Legs,
        BodyPart::Feet,
    ];

    /// Split a raw body part id into the part and whether it is a female kit.
    #[must_use]
    pub fn from_id(id: u8) -> Option<(BodyPart, bool)> {
        if id >= BODY_PARTS_PER_GENDER * 2 {
            return None;
        }
        let part = Self::ALL[usize::from(id % BODY_PARTS_PER_GENDER)];
        Some((part, id >= BODY_PARTS_PER_GENDER))
    }

    /// Raw body part id for this part and gender.
    #[must_use]
    pub fn id(self, female: bool) -> u8 {
        let base = self as u8;
        if female {
            base + BODY_PARTS_PER_GENDER
        } else {
            base
        }
    }
}

/// A decoded identikit entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentikitDef {
    /// Raw body part id, `None` until set.
    pub body_part: Option<u8>,
    /// Body model ids, in merge order.
    pub model_ids: Option<Vec<u16>>,
    /// Head model slots; unset slots are `None`.
    pub head_model_ids: [Option<u16>; HEAD_MODEL_SLOTS],
    pub source_colors: [u16; RECOLOR_SLOTS],
    pub target_colors: [u16; RECOLOR_SLOTS],
    /// Hidden from the character designer.
    pub disabled: bool,
}

impl IdentikitDef {
    /// Decode one entry up to and including its terminating 0 tag.
    ///
    /// `id` is only used to label errors.
    pub fn decode(buf: &mut Buffer<'_>, id: usize) -> DecodeResult<Self> {
        let mut def = Self::default();
        loop {
            let offset = buf.position();
            let tag = buf.g1()?;
            match tag {
                0 => return Ok(def),
                1 => def.body_part = Some(buf.g1()?),
                2 => {
                    let count = buf.g1()?;
                    let ids = (0..count)
                        .map(|_| buf.g2())
                        .collect::<DecodeResult<Vec<_>>>()?;
                    def.model_ids = Some(ids);
                }
                3 => def.disabled = true,
                40..=49 => {
                    let slot = slot(id, tag, 40, RECOLOR_SLOTS, offset)?;
                    def.source_colors[slot] = buf.g2()?;
                }
                50..=59 => {
                    let slot = slot(id, tag, 50, RECOLOR_SLOTS, offset)?;
                    def.target_colors[slot] = buf.g2()?;
                }
                60..=69 => {
                    let slot = slot(id, tag, 60, HEAD_MODEL_SLOTS, offset)?;
                    def.head_model_ids[slot] = Some(buf.g2()?);
                }
                _ => return Err(DecodeError::UnknownTag { id, tag, offset }),
            }
        }
    }

    /// Body part and gender, if the raw id is in range.
    #[must_use]
    pub fn body_part_kind(&self) -> Option<(BodyPart, bool)> {
        self.body_part.and_then(BodyPart::from_id)
    }

    /// Active `(source, target)` recolor pairs in slot order.
    ///
    /// The scan stops at the first slot whose source color is 0, so later
    /// slots are ignored even if set.
    pub fn recolor_pairs(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.source_colors
            .iter()
            .zip(&self.target_colors)
            .take_while(|(src, _)| **src != 0)
            .map(|(&src, &dst)| (src, dst))
    }

    /// Set head model ids in slot order.
    pub fn head_model_ids(&self) -> impl Iterator<Item = u16> + '_ {
        self.head_model_ids.iter().filter_map(|id| *id)
    }
}

/// Map a slotted tag to its array index.
///
/// Tag ranges are ten wide but the arrays are shorter, so the upper tags of
/// each range name slots that do not exist.
fn slot(id: usize, tag: u8, base: u8, len: usize, offset: usize) -> DecodeResult<usize> {
    let slot = usize::from(tag - base);
    if slot < len {
        Ok(slot)
    } else {
        Err(DecodeError::SlotOutOfRange { id, tag, offset })
    }
}

/// Decode a full identikit table; entry index is the kit id.
pub fn decode_identikits(data: &[u8]) -> DecodeResult<Vec<IdentikitDef>> {
    let mut buf = Buffer::new(data);
    let count = usize::from(buf.g2()?);
    (0..count)
        .map(|id| IdentikitDef::decode(&mut buf, id))
        .collect()
}
