use dddcore::value_object::{ValueObject, value_eq};
use dddcore_macros::value_object;

#[value_object]
struct Money {
    amount: i64,
    currency: String,
}

#[value_object]
#[derive(PartialOrd, Hash)]
struct Sku(String);

#[value_object(eq = false)]
struct Coordinates {
    lat: f64,
    lon: f64,
}

#[value_object(debug = false)]
struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[value_object]
enum Status {
    Active,
    Suspended { reason: String },
}

// 泛型值对象
#[value_object]
struct Tagged<T> {
    label: String,
    value: T,
}

fn is_value_object<V: ValueObject>(_: &V) {}

fn main() {
    let a = Money { amount: 10, currency: "EUR".into() };
    let b = Money { amount: 10, currency: "EUR".into() };
    assert_eq!(a, b);
    assert_ne!(a, Money { amount: 11, currency: "EUR".into() });

    assert!(Sku("a".into()) < Sku("b".into()));
    assert!(!value_eq(&Sku("a".into()), &Password("a".into())));

    let here = Coordinates { lat: 1.0, lon: 2.0 };
    assert_eq!(here.clone(), here);

    assert_eq!(format!("{:?}", Password("hunter2".into())), "Password(***)");

    let s = Status::Suspended { reason: "fraud".into() };
    is_value_object(&s);
    assert_ne!(s, Status::Active);

    let tagged = Tagged { label: "qty".into(), value: 3u32 };
    is_value_object(&tagged);
    assert_eq!(tagged, Tagged { label: "qty".into(), value: 3u32 });
    assert!(value_eq(&tagged, &tagged.clone()));
    assert!(!value_eq(&tagged, &Tagged { label: "qty".into(), value: 3u64 }));
    assert_eq!(Tagged::<String>::default().value, "");

    let json = serde_json::to_string(&a).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
}
