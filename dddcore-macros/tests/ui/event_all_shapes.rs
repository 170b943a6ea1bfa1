use dddcore::domain_event::{DomainEvent, DomainEventPublisher, DomainEventSubscriber};
use dddcore_macros::domain_event;

// 单元结构体
#[domain_event(name = "DummyEvent")]
struct DummyEvent;

// 空具名结构体，名称缺省为类型名
#[domain_event]
struct Pinged {}

// 已存在的时间戳字段被复用
#[domain_event]
#[derive(Eq)]
struct Renamed {
    from: String,
    occurred_at: dddcore::clock::Timestamp,
    to: String,
}

// 字段名与生成的构造参数同名
#[domain_event]
struct ClockSynced {
    clock: String,
    __clock: u8,
    skew_ms: i64,
}

struct NullPublisher;

#[async_trait::async_trait]
impl DomainEventPublisher<Pinged> for NullPublisher {
    async fn publish(&self, _event: Pinged) -> anyhow::Result<()> {
        Ok(())
    }
}

struct NullSubscriber;

#[async_trait::async_trait]
impl DomainEventSubscriber<Pinged> for NullSubscriber {
    async fn handle_event(&self, _event: &Pinged) -> anyhow::Result<()> {
        Ok(())
    }
}

fn main() {
    assert_eq!(DummyEvent::new().name(), "DummyEvent");
    assert_eq!(Pinged::new().name(), "Pinged");

    let renamed = Renamed::new("a".into(), "b".into());
    assert_eq!(renamed.name(), "Renamed");
    assert_eq!(renamed.clone(), renamed);
    assert_eq!((renamed.from.as_str(), renamed.to.as_str()), ("a", "b"));

    let at = chrono::DateTime::<chrono::Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    let synced = ClockSynced::with_clock(&dddcore::clock::FixedClock::new(at), "ntp".into(), 1, -3);
    assert_eq!(synced.timestamp_utc(), at);
    assert_eq!((synced.clock.as_str(), synced.__clock, synced.skew_ms), ("ntp", 1, -3));
    let later = ClockSynced::with_timestamp(at, "gps".into(), 2, 0);
    assert_eq!(later.clock, "gps");

    let _ = (NullPublisher, NullSubscriber);
}
