use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use model::network::Network;
use model::test_utilities::TestInstance;
use solver::{
    DualPrices, FrontierKind, PricingConfig, PricingEngine, VehicleBounds, VehicleDuals,
};

/// a day of hourly trips of a few customers (every third one with an alternative route), some
/// vehicles and two refuel points usable between any two trips.
fn generated_instance(number_of_trips: usize, number_of_vehicles: usize) -> Network {
    let mut instance = TestInstance::new(50.0, 0.001, 0.00005, 0.0005)
        .uniform_dead_head(900.0, 5000.0)
        .refuel_point("R0")
        .refuel_point("R1");
    for c in 0..number_of_trips / 2 {
        let customer = format!("c{}", c);
        instance = if c % 3 == 0 {
            let alternative = format!("{}_alt", customer);
            instance.customer_with_routes(&customer, &[&customer, &alternative])
        } else {
            instance.customer(&customer)
        };
    }
    for v in 0..number_of_vehicles {
        instance = instance.vehicle(&format!("veh{}", v), 1.0, 3600.0 * (v % 4) as f64);
    }
    let mut trip_ids = Vec::new();
    for j in 0..number_of_trips {
        let customer = j / 2 % (number_of_trips / 2);
        let route = if customer % 3 == 0 && j % 2 == 1 {
            format!("c{}_alt", customer)
        } else {
            format!("c{}", customer)
        };
        let start = 1800.0 * j as f64;
        let id = format!("t{}", j);
        instance = instance.trip(&id, &route, start, start + 2400.0, 0.15, 10.0);
        trip_ids.push(id);
    }
    for (a, from) in trip_ids.iter().enumerate() {
        for to in trip_ids.iter().skip(a + 1) {
            instance = instance.pareto_refuel_points(from, to, &["R0", "R1"]);
        }
    }
    instance.build()
}

fn duals(network: &Network) -> DualPrices {
    DualPrices::new(
        network
            .vehicles()
            .map(|v| VehicleDuals {
                trips: network
                    .trips()
                    .map(|t| -20.0 - (t.idx() % 5) as f64)
                    .collect(),
                convexity: (v.idx() % 2) as f64,
                ..VehicleDuals::zero(network.number_of_trips())
            })
            .collect(),
    )
}

pub fn pricing_benchmarks(c: &mut Criterion) {
    let network = Arc::new(generated_instance(40, 6));
    let duals = duals(&network);
    let bounds: Vec<VehicleBounds> = network
        .vehicles()
        .map(|_| VehicleBounds::unrestricted(network.number_of_trips()))
        .collect();

    let exact = PricingEngine::new(network.clone(), PricingConfig::default());
    c.bench_function("price_exact", |b| {
        b.iter(|| exact.price(&duals, &bounds).unwrap())
    });

    let discrete = PricingEngine::new(
        network.clone(),
        PricingConfig {
            frontier: FrontierKind::Discrete { levels: 50 },
            ..PricingConfig::default()
        },
    );
    c.bench_function("price_discrete", |b| {
        b.iter(|| discrete.price(&duals, &bounds).unwrap())
    });

    let sequential = PricingEngine::new(
        network.clone(),
        PricingConfig {
            parallel: false,
            ..PricingConfig::default()
        },
    );
    c.bench_function("price_sequential", |b| {
        b.iter(|| sequential.price(&duals, &bounds).unwrap())
    });
}

criterion_group!(benches, pricing_benchmarks);
criterion_main!(benches);
