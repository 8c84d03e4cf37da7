// crates/synctab-core/tests/exhaustive_tables.rs

use std::collections::HashSet;

use synctab_core::cancel::NeverCancel;
use synctab_core::config::config::StaticWindow;
use synctab_core::config::defaults::{config_for, preset};
use synctab_core::search::exhaustive::{self, mixed_radix_digits, Odometer};
use synctab_core::search::state::{Mode, PassStop};
use synctab_core::table::{assignment_sum, bucket_of, BUCKETS};

#[test]
fn single_line_fills_exactly_the_candidate_buckets() {
    let cfg = config_for(&[160, 204, 230]);
    let report = exhaustive::run(&cfg, 1, &mut NeverCancel);

    assert_eq!(report.state.mode, Mode::Exhaustive);
    assert_eq!(report.stop, PassStop::Exhausted);
    assert_eq!(report.evaluated, 3);
    assert_eq!(report.state.missing, 125);

    let filled: Vec<usize> = report.table.iter().filter(|(_, s)| s.is_some()).map(|(b, _)| b).collect();
    assert_eq!(filled, vec![80, 102, 115]);
    assert_eq!(report.table.slot(80), Some(&[160][..]));
    assert_eq!(report.table.slot(102), Some(&[204][..]));
    assert_eq!(report.table.slot(115), Some(&[230][..]));
}

#[test]
fn odometer_is_a_bijection_with_mixed_radix_indexes() {
    let radix = 3;
    let positions = 4;
    let mut o = Odometer::new(radix, positions);
    let mut seen = HashSet::new();
    let mut k: u128 = 0;

    loop {
        assert_eq!(o.digits(), mixed_radix_digits(k, radix, positions).as_slice(), "tuple {k}");
        assert!(seen.insert(o.digits().to_vec()), "tuple {k} visited twice");
        k += 1;
        if !o.advance() {
            break;
        }
    }
    assert_eq!(k, 81);
    assert_eq!(seen.len(), 81);
}

#[test]
fn four_lengths_four_lines_enumerates_all_256_tuples() {
    let cfg = config_for(&[160, 186, 204, 230]);
    let a = exhaustive::run(&cfg, 4, &mut NeverCancel);
    let b = exhaustive::run(&cfg, 4, &mut NeverCancel);

    // Only 25 offsets are reachable with four of these lengths.
    assert_eq!(a.evaluated, 256);
    assert_eq!(a.stop, PassStop::Exhausted);
    assert_eq!(a.state.missing, BUCKETS - 25);
    assert_eq!(a.table, b.table);
}

#[test]
fn max12_completes_in_four_lines() {
    let p = preset("max12").unwrap();
    let cfg = config_for(p.candidates);
    let report = exhaustive::run(&cfg, 4, &mut NeverCancel);

    assert_eq!(report.stop, PassStop::Filled);
    assert_eq!(report.state.missing, 0);
    assert!(report.table.is_complete());
    // stops as soon as the last bucket fills, well before 12^4
    assert_eq!(report.evaluated, 9426);

    for (bucket, slot) in report.table.iter() {
        let a = slot.unwrap();
        assert_eq!(a.len(), 4);
        assert!(a.iter().all(|v| p.candidates.contains(v)));
        assert_eq!(bucket_of(assignment_sum(a)), bucket);
    }
}

#[test]
fn first_tuple_in_enumeration_order_wins() {
    let cfg = config_for(&[160, 186, 204, 230]);
    let report = exhaustive::run(&cfg, 2, &mut NeverCancel);
    // 160+204 and 204+160 share a bucket; enumeration meets 160,204 first
    let bucket = bucket_of(364);
    assert_eq!(report.table.slot(bucket), Some(&[160, 204][..]));
}

#[test]
fn static_window_only_accepts_sums_inside_it() {
    let p = preset("max12").unwrap();
    let mut cfg = config_for(p.candidates);
    cfg.static_window = Some(StaticWindow::new(512));

    let report = exhaustive::run(&cfg, 4, &mut NeverCancel);
    assert_eq!(report.evaluated, 12u64.pow(4));
    assert!(report.state.missing > 0);

    for (bucket, slot) in report.table.iter() {
        if let Some(a) = slot {
            let sum = assignment_sum(a);
            assert!((512..768).contains(&sum), "bucket {bucket} sum {sum}");
            assert_eq!(bucket_of(sum), bucket);
        }
    }
}

#[test]
fn static_window_out_of_reach_fills_nothing() {
    let mut cfg = config_for(&[160, 204, 230]);
    cfg.static_window = Some(StaticWindow::new(1024));

    let report = exhaustive::run(&cfg, 2, &mut NeverCancel);
    assert_eq!(report.evaluated, 9);
    assert_eq!(report.state.missing, BUCKETS);
    assert_eq!(report.table.filled(), 0);
}
