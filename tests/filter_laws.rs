mod common;

use common::asset;
use crypto_tracker_wasm::domain::market_data::{Asset, TotalSupply, project};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Letters in both cases plus a space; ASCII keeps upper/lower casing reversible
const ALPHABET: &[char] = &['a', 'b', 'c', 'o', 'A', 'B', 'C', 'O', ' '];

fn arbitrary_text(g: &mut Gen, max_len: usize) -> String {
    let len = usize::arbitrary(g) % (max_len + 1);
    (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect()
}

#[derive(Clone, Debug)]
struct Batch(Vec<Asset>);

impl Arbitrary for Batch {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 30;
        Batch(
            (0..len)
                .map(|i| {
                    let mut a = asset(i as u32 + 1, &format!("id-{i}"), &arbitrary_text(g, 10));
                    if bool::arbitrary(g) {
                        a.total_supply = TotalSupply::Unknown;
                    }
                    a
                })
                .collect(),
        )
    }
}

#[derive(Clone, Debug)]
struct Query(String);

impl Arbitrary for Query {
    fn arbitrary(g: &mut Gen) -> Self {
        Query(arbitrary_text(g, 3))
    }
}

fn position(batch: &[Asset], a: &Asset) -> usize {
    batch.iter().position(|b| b.id == a.id).unwrap()
}

#[quickcheck]
fn keeps_exactly_the_matches_in_order(batch: Batch, query: Query) -> bool {
    let projected = project(&batch.0, &query.0);
    let needle = query.0.to_lowercase();
    let expected: Vec<&Asset> =
        batch.0.iter().filter(|a| a.name.to_lowercase().contains(&needle)).collect();

    let in_order = projected
        .windows(2)
        .all(|pair| position(&batch.0, &pair[0]) < position(&batch.0, &pair[1]));
    in_order && projected.iter().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn empty_query_is_identity(batch: Batch) -> bool {
    project(&batch.0, "") == batch.0
}

#[quickcheck]
fn projection_is_idempotent(batch: Batch, query: Query) -> bool {
    let once = project(&batch.0, &query.0);
    project(&once, &query.0) == once
}

#[quickcheck]
fn query_case_does_not_matter(batch: Batch, query: Query) -> bool {
    let plain = project(&batch.0, &query.0);
    plain == project(&batch.0, &query.0.to_uppercase())
        && plain == project(&batch.0, &query.0.to_lowercase())
}

#[quickcheck]
fn unknown_supply_survives_projection(batch: Batch, query: Query) -> bool {
    project(&batch.0, &query.0).iter().all(|a| {
        let original = &batch.0[position(&batch.0, a)];
        a.total_supply == original.total_supply
    })
}

#[test]
fn bit_matches_both_bitcoins() {
    let batch = vec![
        asset(1, "bitcoin", "Bitcoin"),
        asset(2, "ethereum", "Ethereum"),
        asset(18, "bitcoin-cash", "Bitcoin Cash"),
    ];
    let names: Vec<String> = project(&batch, "bit").into_iter().map(|a| a.name).collect();
    assert_eq!(names, ["Bitcoin", "Bitcoin Cash"]);
}
