use dddcore::entity::{Entity, entity_eq};
use dddcore::identity::Identity;
use dddcore_macros::entity;

// 用户声明的 PartialEq/Hash 派生会被宏移除
#[entity]
#[derive(PartialEq, Hash)]
struct User {
    name: String,
}

// 已存在的 id 字段被移到最前并保留可见性
#[entity]
struct Device {
    serial: u32,
    pub id: Identity,
}

#[entity(debug = false)]
struct Secret {
    payload: Vec<u8>,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({})", self.id())
    }
}

fn main() {
    let mut alice = User::with_identity(Identity::from_string("u-1"));
    alice.name = "alice".into();
    let renamed = User {
        name: "alice smith".into(),
        ..alice.clone()
    };
    assert_eq!(alice, renamed);
    assert_ne!(alice, User::new(None));

    let device = Device::with_identity(Identity::from_string("u-1"));
    assert_eq!(device.id.as_str(), "u-1");
    assert_eq!(device.serial, 0);
    assert!(!entity_eq(&alice, &device));

    let secret = Secret::new(Some(Identity::from_string("s-1")));
    assert_eq!(format!("{secret:?}"), "Secret(s-1)");
    assert!(secret.payload.is_empty());
}
