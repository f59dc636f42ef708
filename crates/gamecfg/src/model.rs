//! Renderable models and the sources that resolve them by id.

use std::collections::HashMap;

use glam::IVec3;

/// A flat-shaded triangle model.
///
/// Each triangle carries one 16-bit palette color; recoloring rewrites
/// matching face colors in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub vertices: Vec<IVec3>,
    pub triangles: Vec<[u32; 3]>,
    pub face_colors: Vec<u16>,
}

impl Model {
    /// Create a model; `face_colors` must have one entry per triangle.
    #[must_use]
    pub fn new(vertices: Vec<IVec3>, triangles: Vec<[u32; 3]>, face_colors: Vec<u16>) -> Self {
        debug_assert_eq!(triangles.len(), face_colors.len());
        Self {
            vertices,
            triangles,
            face_colors,
        }
    }

    /// Combine several models into one, in order.
    ///
    /// Triangle indices of later parts are rebased past the vertices of the
    /// earlier ones. Merging zero parts gives an empty model.
    #[must_use]
    pub fn merge(parts: &[Model]) -> Self {
        let mut out = Model {
            vertices: Vec::with_capacity(parts.iter().map(|p| p.vertices.len()).sum()),
            triangles: Vec::with_capacity(parts.iter().map(|p| p.triangles.len()).sum()),
            face_colors: Vec::with_capacity(parts.iter().map(|p| p.face_colors.len()).sum()),
        };
        for part in parts {
            let base = u32::try_from(out.vertices.len()).unwrap_or(u32::MAX);
            out.vertices.extend_from_slice(&part.vertices);
            out.triangles
                .extend(part.triangles.iter().map(|t| t.map(|i| i.saturating_add(base))));
            out.face_colors.extend_from_slice(&part.face_colors);
        }
        out
    }

    /// Replace every face colored `from` with `to`.
    pub fn recolor(&mut self, from: u16, to: u16) {
        for color in &mut self.face_colors {
            if *color == from {
                *color = to;
            }
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.vertices.is_empty()
    }
}

/// Resolves model ids to models.
///
/// The source owns its models; callers receive copies they can recolor.
pub trait ModelSource {
    /// Resolve `id`, or `None` if the model is unknown or not loaded yet.
    fn model(&self, id: u16) -> Option<Model>;

    /// Whether `id` can be resolved right now.
    fn is_ready(&self, id: u16) -> bool {
        self.model(id).is_some()
    }
}

/// A source that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModels;

impl ModelSource for NoModels {
    fn model(&self, _id: u16) -> Option<Model> {
        None
    }

    fn is_ready(&self, _id: u16) -> bool {
        false
    }
}

/// In-memory model store keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ModelCache {
    models: HashMap<u16, Model>,
}

impl ModelCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a model, returning the one it replaced.
    pub fn insert(&mut self, id: u16, model: Model) -> Option<Model> {
        self.models.insert(id, model)
    }

    pub fn remove(&mut self, id: u16) -> Option<Model> {
        self.models.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelSource for ModelCache {
    fn model(&self, id: u16) -> Option<Model> {
        self.models.get(&id).cloned()
    }

    fn is_ready(&self, id: u16) -> bool {
        self.models.contains_key(&id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn triangle(offset: i32, color: u16) -> Model {
        Model::new(
            vec![
                IVec3::new(offset, 0, 0),
                IVec3::new(offset + 1, 0, 0),
                IVec3::new(offset, 1, 0),
            ],
            vec![[0, 1, 2]],
            vec![color],
        )
    }

    #[test]
    fn merge_rebases_indices() {
        let merged = Model::merge(&[triangle(0, 10), triangle(5, 20)]);
        assert_eq!(merged.vertex_count(), 6);
        assert_eq!(merged.triangles, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(merged.face_colors, vec![10, 20]);
        assert_eq!(merged.vertices[3], IVec3::new(5, 0, 0));
    }

    /// A strip of `n` vertices with one triangle over the last three.
    pub(crate) fn strip(n: i32, color: u16) -> Model {
        let last = u32::try_from(n - 1).unwrap();
        Model::new(
            (0..n).map(|i| IVec3::new(i, 0, i % 2)).collect(),
            vec![[last - 2, last - 1, last]],
            vec![color],
        )
    }

    #[test]
    fn merge_past_sixteen_bit_vertex_count() {
        let merged = Model::merge(&[strip(40_000, 1), strip(40_000, 2)]);
        assert_eq!(merged.vertex_count(), 80_000);
        assert_eq!(
            merged.triangles,
            vec![[39_997, 39_998, 39_999], [79_997, 79_998, 79_999]]
        );
        assert_eq!(merged.vertices[79_999], IVec3::new(39_999, 0, 1));
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        let merged = Model::merge(&[]);
        assert!(merged.is_empty());
        assert_eq!(merged, Model::default());
    }

    #[test]
    fn recolor_only_touches_matching_faces() {
        let mut model = Model::merge(&[triangle(0, 10), triangle(0, 20), triangle(0, 10)]);
        model.recolor(10, 99);
        assert_eq!(model.face_colors, vec![99, 20, 99]);
    }

    #[test]
    fn cache_resolves_inserted_models() {
        let mut cache = ModelCache::new();
        assert!(cache.is_empty());
        assert!(cache.insert(7, triangle(0, 1)).is_none());
        assert!(cache.is_ready(7));
        assert!(!cache.is_ready(8));
        assert_eq!(cache.model(7), Some(triangle(0, 1)));
        assert_eq!(cache.remove(7), Some(triangle(0, 1)));
        assert!(NoModels.model(7).is_none());
    }
}
