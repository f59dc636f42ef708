//! Building renderable models from identikit entries.

use gamecfg_decode::IdentikitDef;

use crate::model::{Model, ModelSource};

/// Model derivation for appearance kits.
pub trait KitModels {
    /// The recolored body model, or `None` if the kit has no body models or
    /// any of them cannot be resolved.
    ///
    /// A single body model is used as is; several are merged in order.
    fn model(&self, source: &dyn ModelSource) -> Option<Model>;

    /// The recolored head model built from every set head slot.
    ///
    /// Unresolved slots are skipped; a kit with no usable head parts gives an
    /// empty model.
    fn head_model(&self, source: &dyn ModelSource) -> Model;

    /// Whether every body model is available in `source`.
    fn is_body_ready(&self, source: &dyn ModelSource) -> bool;

    /// Whether every set head model is available in `source`.
    fn is_head_ready(&self, source: &dyn ModelSource) -> bool;
}

impl KitModels for IdentikitDef {
    fn model(&self, source: &dyn ModelSource) -> Option<Model> {
        let ids = self.model_ids.as_deref()?;
        let mut model = match ids {
            [] => return None,
            [id] => source.model(*id)?,
            _ => {
                let parts = ids
                    .iter()
                    .map(|&id| source.model(id))
                    .collect::<Option<Vec<_>>>()?;
                Model::merge(&parts)
            }
        };
        apply_recolors(self, &mut model);
        Some(model)
    }

    fn head_model(&self, source: &dyn ModelSource) -> Model {
        let parts: Vec<Model> = self
            .head_model_ids()
            .filter_map(|id| {
                let part = source.model(id);
                if part.is_none() {
                    tracing::debug!(model_id = id, "head model not available");
                }
                part
            })
            .collect();
        let mut model = Model::merge(&parts);
        apply_recolors(self, &mut model);
        model
    }

    fn is_body_ready(&self, source: &dyn ModelSource) -> bool {
        self.model_ids
            .as_deref()
            .is_none_or(|ids| ids.iter().all(|&id| source.is_ready(id)))
    }

    fn is_head_ready(&self, source: &dyn ModelSource) -> bool {
        self.head_model_ids().all(|id| source.is_ready(id))
    }
}

fn apply_recolors(def: &IdentikitDef, model: &mut Model) {
    for (from, to) in def.recolor_pairs() {
        model.recolor(from, to);
    }
}
