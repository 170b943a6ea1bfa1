use std::num::NonZeroU8;

use dddcore::entity::Entity;
use dddcore::identity::{IdGenerator, Identity};
use dddcore_macros::{aggregate_root, entity, value_object};

#[value_object]
struct Money {
    cents: u64,
    currency: String,
}

#[value_object]
enum Tier {
    #[default]
    Standard,
    Gold,
}

// 字段类型没有 Default 时显式关闭
#[value_object(default = false)]
struct Percent(NonZeroU8);

#[entity]
struct LineItem {
    sku: String,
    price: Money,
}

#[aggregate_root]
struct Invoice {
    lines: Vec<LineItem>,
    total: Money,
    tier: Tier,
}

struct Fixed;

impl IdGenerator for Fixed {
    fn next_identity(&self) -> Identity {
        Identity::from_string("inv-1")
    }
}

fn main() {
    let mut line = LineItem::new(None);
    line.price = Money { cents: 1_250, currency: "EUR".into() };

    let mut invoice = Invoice::new_with(&Fixed);
    assert_eq!(invoice.id().as_str(), "inv-1");
    assert_eq!(invoice.total, Money::default());
    assert_eq!(invoice.tier, Tier::Standard);

    invoice.total = line.price.clone();
    invoice.lines.push(line);
    invoice.tier = Tier::Gold;
    assert_eq!(invoice, Invoice::with_identity(Identity::from_string("inv-1")));

    let five = NonZeroU8::new(5).unwrap();
    assert_eq!(Percent(five), Percent(five));
}
