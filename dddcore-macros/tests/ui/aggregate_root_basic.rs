use dddcore::aggregate_root::AggregateRoot;
use dddcore::entity::Entity;
use dddcore::repository::Repository;
use dddcore_macros::aggregate_root;

#[aggregate_root]
struct Cart {
    items: Vec<String>,
}

struct CartRepository;

impl Repository for CartRepository {
    type Aggregate = Cart;
}

fn assert_aggregate<A: AggregateRoot>(a: &A) -> &dddcore::identity::Identity {
    a.id()
}

fn main() {
    let mut cart = Cart::new(None);
    cart.items.push("book".into());
    let id = assert_aggregate(&cart).clone();
    assert_eq!(cart, Cart::with_identity(id));
    let _repo = CartRepository;
}
