//! Fund split and reward table tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use prizefund_core::reward::{FundSplit, Rank, Rate, RewardTable, ScoreSet};

#[test]
fn default_split_is_9000_into_5850_and_3150() {
    let fund = FundSplit::default().compute().unwrap();
    assert_eq!(fund.total, 9000);
    assert_eq!(fund.public_pool, 5850);
    assert_eq!(fund.internal_pool, 3150);
    assert_eq!(fund.internal_share(), Rate::from_bps(3_500));
}

#[test]
fn pools_always_sum_to_the_fund() {
    for principal in [0, 1, 3, 99, 12_345, 100_000, 7_777_777] {
        for rate_bps in [0, 1, 450, 900, 1_250, 10_000] {
            for share_bps in [0, 1, 3_333, 6_500, 9_999, 10_000] {
                let fund = FundSplit {
                    principal,
                    interest_rate: Rate::from_bps(rate_bps),
                    public_share: Rate::from_bps(share_bps),
                }
                .compute()
                .unwrap();
                assert_eq!(fund.public_pool + fund.internal_pool, fund.total);
            }
        }
    }
}

#[test]
fn share_above_whole_is_rejected() {
    let err = FundSplit {
        public_share: Rate::from_bps(10_001),
        ..FundSplit::default()
    }
    .compute()
    .expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn rate_parsing_and_display() {
    assert_eq!(Rate::from_fraction(0.09), Some(Rate::from_bps(900)));
    assert_eq!(Rate::from_fraction(0.0925), Some(Rate::from_bps(925)));
    assert_eq!(Rate::from_fraction(-0.01), None);
    assert_eq!(Rate::from_fraction(f64::NAN), None);

    assert_eq!(Rate::from_bps(900).to_string(), "9%");
    assert_eq!(Rate::from_bps(950).to_string(), "9.5%");
    assert_eq!(Rate::from_bps(925).to_string(), "9.25%");
    assert_eq!(Rate::from_bps(6_500).to_string(), "65%");
    assert_eq!(Rate::from_ppm(91_250).to_string(), "9.125%");
}

#[test]
fn sub_basis_point_rate_rounds_the_product_once() {
    let rate = Rate::from_fraction(0.09125).unwrap();
    assert_eq!(rate, Rate::from_ppm(91_250));

    let fund = FundSplit {
        interest_rate: rate,
        ..FundSplit::default()
    }
    .compute()
    .unwrap();
    assert_eq!(fund.total, 9125);
    assert_eq!(fund.public_pool + fund.internal_pool, 9125);
}

#[test]
fn reward_table_rows_and_totals() {
    let table = RewardTable::compute(5850, ScoreSet::new(589, 550, 480));
    assert_eq!(table.rows[0].rank, Rank::First);
    assert_eq!(table.rows[0].label, "🥇 1st");
    assert_eq!(table.rows[2].score, 480);
    assert_eq!(table.total(), 5850);
    assert!(table.is_balanced());

    let empty = RewardTable::compute(5850, ScoreSet::default());
    assert_eq!(empty.total(), 0);
    assert!(!empty.is_balanced());
}

#[test]
fn reward_table_serializes_rank_names() {
    let table = RewardTable::compute(10, ScoreSet::new(1, 1, 2));
    let v = serde_json::to_value(&table).unwrap();
    assert_eq!(v["pool"], 10);
    assert_eq!(v["rows"][1]["rank"], "second");
    assert_eq!(v["rows"][2]["reward"], 6);
}
