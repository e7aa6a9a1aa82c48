use itertools::assert_equal;
use model::base_types::{CustomerIdx, RouteIdx, VertexIdx};

use super::{Label, LabelArena, RouteUsage};

fn label(vertex: u32, fuel: f64, reduced_cost: f64) -> Label {
    Label {
        fuel,
        reduced_cost,
        ..Label::seed(VertexIdx(vertex), RouteUsage::new())
    }
}

#[test]
fn commit_same_route_twice_is_allowed_test() {
    // ARRANGE
    let usage = RouteUsage::new()
        .commit(CustomerIdx(0), RouteIdx(1))
        .unwrap();

    // ACT
    let again = usage.commit(CustomerIdx(0), RouteIdx(1));
    let other = usage.commit(CustomerIdx(0), RouteIdx(2));

    // ASSERT
    assert_eq!(again, Some(usage.clone()));
    assert_eq!(other, None);
    assert_eq!(usage.committed_route(CustomerIdx(0)), Some(RouteIdx(1)));
}

#[test]
fn commit_does_not_change_origin_test() {
    // ARRANGE
    let origin = RouteUsage::new()
        .commit(CustomerIdx(3), RouteIdx(0))
        .unwrap();

    // ACT
    let extended = origin.commit(CustomerIdx(1), RouteIdx(4)).unwrap();

    // ASSERT
    assert_eq!(origin.len(), 1);
    assert_equal(extended.customers(), [CustomerIdx(1), CustomerIdx(3)]);
}

#[test]
fn retain_drops_commitments_test() {
    // ARRANGE
    let usage = RouteUsage::new()
        .commit(CustomerIdx(0), RouteIdx(0))
        .and_then(|u| u.commit(CustomerIdx(1), RouteIdx(1)))
        .and_then(|u| u.commit(CustomerIdx(2), RouteIdx(2)))
        .unwrap();

    // ACT
    let retained = usage.retain(|c| c != CustomerIdx(1));
    let everything = usage.retain(|_| true);
    let nothing = usage.retain(|_| false);

    // ASSERT
    assert_equal(retained.customers(), [CustomerIdx(0), CustomerIdx(2)]);
    assert_eq!(everything, usage);
    assert!(nothing.is_empty());
    assert_eq!(nothing, RouteUsage::new());
}

#[test]
fn dominance_respects_epsilon_test() {
    // ARRANGE
    let a = label(0, 0.5, -3.0);
    let b = label(0, 0.5 + 1e-7, -3.0 - 1e-7);
    let c = label(0, 0.4, -2.0);

    // ACT & ASSERT
    assert!(a.dominates(&b, 1e-6));
    assert!(b.dominates(&a, 1e-6));
    assert!(!a.dominates(&b, 0.0));
    assert!(!a.dominates(&c, 1e-6));
    assert!(!c.dominates(&a, 1e-6));
}

#[test]
fn labels_of_different_length_are_not_comparable_test() {
    // ARRANGE
    let a = label(0, 0.5, -3.0);
    let mut b = label(0, 0.5, -3.0);
    b.length = 1;
    let committed = RouteUsage::new()
        .commit(CustomerIdx(0), RouteIdx(0))
        .unwrap();
    let c = Label {
        usage: committed,
        ..label(0, 0.5, -3.0)
    };

    // ACT & ASSERT
    assert!(a.is_comparable_to(&a.clone()));
    assert!(!a.is_comparable_to(&b));
    assert!(!a.is_comparable_to(&c));
}

#[test]
fn arena_chain_follows_predecessors_test() {
    // ARRANGE
    let mut arena = LabelArena::new();
    let first = arena.push(label(5, 0.0, 0.0));
    let second = arena.push(Label {
        predecessor: Some(first),
        length: 1,
        ..label(3, 0.2, -1.0)
    });
    let third = arena.push(Label {
        predecessor: Some(second),
        length: 2,
        ..label(0, 0.4, -2.0)
    });

    // ACT
    let vertices = arena.chain(third).map(|l| l.vertex());

    // ASSERT
    assert_equal(vertices, [VertexIdx(0), VertexIdx(3), VertexIdx(5)]);
    assert_eq!(arena.len(), 3);
    assert_eq!(arena[second].length(), 1);
}
