//! Load a config archive end to end and derive appearance models from it.

use gamecfg::{
    BodyPart, ConfigContext, ConfigSettings, DecodeError, Error, KitModels, Model, ModelCache,
    NoModels,
};
use gamecfg_decode::write_stored;
use glam::IVec3;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn quad(color: u16) -> Model {
    Model::new(
        vec![IVec3::ZERO, IVec3::X, IVec3::Y, IVec3::ONE],
        vec![[0, 1, 2], [1, 3, 2]],
        vec![color, color],
    )
}

#[rustfmt::skip]
fn kit_table() -> Vec<u8> {
    vec![
        0, 3,
        // 0: male torso, two body models, one recolor
        1, 2,
        2, 2, 0x00, 0x64, 0x00, 0x65,
        40, 0x01, 0x00,
        50, 0x02, 0x00,
        60, 0x00, 0xc8,
        0,
        // 1: body part only
        1, 9,
        0,
        // 2: disabled male torso with a single body model
        1, 2,
        2, 1, 0x00, 0x66,
        3,
        0,
    ]
}

fn models() -> ModelCache {
    let mut cache = ModelCache::new();
    cache.insert(100, quad(0x100));
    cache.insert(101, quad(0x300));
    cache.insert(102, quad(0x100));
    cache.insert(200, quad(0x100));
    cache
}

#[test]
fn loads_and_builds_models() {
    init_tracing();
    let archive = write_stored(&[
        ("title.dat", &[0u8; 4][..]),
        ("idk.dat", kit_table().as_slice()),
    ])
    .unwrap();
    let ctx = ConfigContext::load(&archive, &ConfigSettings::default()).unwrap();
    let kits = ctx.identikits();
    assert_eq!(kits.len(), 3);

    let torso = kits.get(0).unwrap();
    assert_eq!(torso.body_part_kind(), Some((BodyPart::Torso, false)));
    let body = torso.model(&models()).unwrap();
    assert_eq!(body.triangle_count(), 4);
    assert_eq!(body.face_colors, vec![0x200, 0x200, 0x300, 0x300]);

    let head = torso.head_model(&models());
    assert_eq!(head.face_colors, vec![0x200, 0x200]);

    let plain = kits.get(1).unwrap();
    assert_eq!(plain.body_part, Some(9));
    assert_eq!(plain.model_ids, None);
    assert!(plain.head_model_ids.iter().all(Option::is_none));
    assert!(plain.model(&models()).is_none());
    assert!(plain.head_model(&models()).is_empty());

    let designable: Vec<usize> = kits
        .designable(BodyPart::Torso, false)
        .map(|(id, _)| id)
        .collect();
    assert_eq!(designable, vec![0]);

    let hidden = kits.get(2).unwrap();
    assert!(hidden.disabled);
    assert_eq!(hidden.model(&models()), Some(quad(0x100)));
}

#[test]
fn missing_models_degrade_quietly() {
    init_tracing();
    let archive = write_stored(&[("idk.dat", kit_table().as_slice())]).unwrap();
    let ctx = ConfigContext::load(&archive, &ConfigSettings::default()).unwrap();
    let torso = ctx.identikits().get(0).unwrap();

    assert!(torso.model(&NoModels).is_none());
    assert!(torso.head_model(&NoModels).is_empty());
    assert!(!torso.is_body_ready(&NoModels));
    assert!(torso.is_body_ready(&models()));
    assert!(torso.is_head_ready(&models()));
}

#[test]
fn unknown_tag_fails_the_load() {
    init_tracing();
    let archive = write_stored(&[("idk.dat", &[0u8, 1, 1, 2, 7, 0][..])]).unwrap();
    let err = ConfigContext::load(&archive, &ConfigSettings::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Decode(DecodeError::UnknownTag {
            id: 0,
            tag: 7,
            offset: 4,
        })
    ));
}

#[test]
fn missing_entry_is_reported() {
    init_tracing();
    let archive = write_stored(&[("loc.dat", &[0u8, 0][..])]).unwrap();
    let err = ConfigContext::load(&archive, &ConfigSettings::default()).unwrap_err();
    assert!(matches!(err, Error::MissingEntry { ref name } if name == "idk.dat"));
    assert_eq!(err.to_string(), "archive has no entry named \"idk.dat\"");
}
