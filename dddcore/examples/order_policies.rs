/// 订单示例
/// 演示实体/聚合根、值对象、规约组合与领域事件发布契约的配合使用
use async_trait::async_trait;
use dddcore::clock::SystemClock;
use dddcore::domain_event::{DomainEvent, DomainEventPublisher, DomainEventSubscriber};
use dddcore::entity::Entity;
use dddcore::error::{DomainError, DomainResult};
use dddcore::identity::Identity;
use dddcore::specification::{Specification, predicate};
use dddcore_macros::{aggregate_root, domain_event, value_object};
use std::sync::Arc;

// ============================================================================
// 领域模型定义
// ============================================================================

#[value_object]
struct Money {
    cents: u64,
    currency: String,
}

#[aggregate_root]
struct Order {
    customer: String,
    total: Money,
    vip: bool,
    submitted: bool,
}

#[domain_event(name = "order.submitted")]
struct OrderSubmitted {
    order_id: Identity,
    total: Money,
}

impl Order {
    fn submit(&mut self, policy: &dyn Specification<Order>) -> DomainResult<OrderSubmitted> {
        if self.submitted {
            return Err(DomainError::new("order already submitted"));
        }
        if !policy.is_satisfied_by(self) {
            return Err(DomainError::new(format!(
                "order {} rejected by submission policy",
                self.id()
            )));
        }
        self.submitted = true;
        Ok(OrderSubmitted::with_clock(
            &SystemClock,
            self.id().clone(),
            self.total.clone(),
        ))
    }
}

// ============================================================================
// 事件发布（进程内演示实现）
// ============================================================================

struct PrintingSubscriber;

#[async_trait]
impl DomainEventSubscriber<OrderSubmitted> for PrintingSubscriber {
    async fn handle_event(&self, event: &OrderSubmitted) -> anyhow::Result<()> {
        println!(
            "[{}] {} at {}: {} {}",
            event.name(),
            event.order_id,
            event.timestamp_utc(),
            event.total.cents,
            event.total.currency
        );
        Ok(())
    }
}

struct DirectPublisher {
    subscribers: Vec<Arc<dyn DomainEventSubscriber<OrderSubmitted>>>,
}

#[async_trait]
impl DomainEventPublisher<OrderSubmitted> for DirectPublisher {
    async fn publish(&self, event: OrderSubmitted) -> anyhow::Result<()> {
        for subscriber in &self.subscribers {
            subscriber.handle_event(&event).await?;
        }
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 规约：金额为正，且（VIP 或 金额不超过 1000.00）
    let positive = predicate(|o: &Order| o.total.cents > 0);
    let vip = predicate(|o: &Order| o.vip);
    let small = predicate(|o: &Order| o.total.cents <= 100_000);
    let policy = positive & (vip | small);

    let publisher = DirectPublisher {
        subscribers: vec![Arc::new(PrintingSubscriber)],
    };

    let mut order = Order::new(None);
    order.customer = "alice".into();
    order.total = Money {
        cents: 250_000,
        currency: "EUR".into(),
    };

    match order.submit(&policy) {
        Ok(_) => unreachable!("large non-VIP order must be rejected"),
        Err(err) => println!("rejected: {err}"),
    }

    order.vip = true;
    let event = order.submit(&policy)?;
    publisher.publish(event).await?;

    let err = order.submit(&policy).unwrap_err();
    println!("{}: {err}", order.customer);
    Ok(())
}
