//! Config tables loaded from the client's config archive.
//!
//! Tables are plain values owned by a [`ConfigContext`] and handed out by
//! reference; nothing here is global.

use gamecfg_decode::{
    Archive, BodyPart, DecodeError, IDENTIKIT_ENTRY, IdentikitDef, decode_identikits,
};

use crate::error::{Error, Result};

/// Settings for loading config tables.
#[derive(Debug, Clone)]
pub struct ConfigSettings {
    /// Archive entry holding the identikit table.
    pub identikit_entry: String,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            identikit_entry: IDENTIKIT_ENTRY.to_string(),
        }
    }
}

/// The identikit table, indexed by kit id.
#[derive(Debug, Clone, Default)]
pub struct IdentikitTable {
    defs: Vec<IdentikitDef>,
}

impl IdentikitTable {
    /// Decode the table from its raw entry bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let defs = decode_identikits(data).inspect_err(|e| match e {
            DecodeError::UnknownTag { id, tag, .. }
            | DecodeError::SlotOutOfRange { id, tag, .. } => {
                tracing::warn!(kit = *id, tag = *tag, "unrecognized identikit field");
            }
            _ => {}
        })?;
        tracing::debug!(count = defs.len(), "decoded identikits");
        Ok(Self { defs })
    }

    /// Locate and decode the table inside a config archive.
    pub fn from_archive(archive: &Archive<'_>, settings: &ConfigSettings) -> Result<Self> {
        let name = settings.identikit_entry.as_str();
        let data = archive.entry(name)?.ok_or_else(|| Error::MissingEntry {
            name: name.to_string(),
        })?;
        Self::from_bytes(data)
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&IdentikitDef> {
        self.defs.get(id)
    }

    /// Number of kits, fixed when the table was decoded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Kits with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &IdentikitDef)> {
        self.defs.iter().enumerate()
    }

    /// Kits the character designer may offer for a body part and gender.
    pub fn designable(
        &self,
        part: BodyPart,
        female: bool,
    ) -> impl Iterator<Item = (usize, &IdentikitDef)> {
        let wanted = part.id(female);
        self.iter()
            .filter(move |(_, def)| !def.disabled && def.body_part == Some(wanted))
    }
}

/// Every config table the client needs, loaded from one archive.
#[derive(Debug, Clone, Default)]
pub struct ConfigContext {
    identikits: IdentikitTable,
}

impl ConfigContext {
    /// Parse a config archive and decode its tables.
    pub fn load(archive_bytes: &[u8], settings: &ConfigSettings) -> Result<Self> {
        let archive = Archive::parse(archive_bytes)?;
        tracing::debug!(entries = archive.len(), "parsed config archive");

        let identikits = IdentikitTable::from_archive(&archive, settings)?;
        tracing::info!(identikits = identikits.len(), "loaded config tables");

        Ok(Self { identikits })
    }

    #[must_use]
    pub fn identikits(&self) -> &IdentikitTable {
        &self.identikits
    }
}
