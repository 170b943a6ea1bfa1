use chrono::{TimeZone, Utc};
use dddcore::clock::FixedClock;
use dddcore::domain_event::DomainEvent;
use dddcore_macros::domain_event;

#[domain_event(name = "order.placed")]
pub struct OrderPlaced {
    pub order_id: String,
    pub total: u64,
}

fn main() {
    let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let event = OrderPlaced::with_clock(&FixedClock::new(t), "o-1".into(), 42);
    assert_eq!(event.name(), "order.placed");
    assert_eq!(OrderPlaced::NAME, "order.placed");
    assert_eq!(event.timestamp_utc(), t);
    assert_eq!(event.order_id, "o-1");
    assert_eq!(event.total, 42);

    let explicit = OrderPlaced::with_timestamp(t, "o-1".into(), 42);
    assert_eq!(explicit, event);
}
