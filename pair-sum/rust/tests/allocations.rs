use pair_sum::{lookup, quadratic, Pair};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// dhat only allows one profiler per process, so everything lives in one test
#[test]
fn heap_usage() {
    let nums: Vec<i32> = (0..1024).collect();
    let target = 1022 + 1023;

    let _profiler = dhat::Profiler::builder().testing().build();

    let before = dhat::HeapStats::get();
    let result = quadratic(&nums, target);
    let after = dhat::HeapStats::get();

    assert_eq!(Some(Pair::new(1022, 1023)), result);
    dhat::assert_eq!(before.total_blocks, after.total_blocks);

    let before = dhat::HeapStats::get();
    let result = lookup(&nums, target);
    let after = dhat::HeapStats::get();

    assert_eq!(Some(Pair::new(1022, 1023)), result);
    dhat::assert!(after.total_blocks > before.total_blocks);
    // The table is dropped before returning
    dhat::assert_eq!(before.curr_blocks, after.curr_blocks);

    let before = dhat::HeapStats::get();
    assert_eq!(None, lookup(&nums[..1], target));
    let after = dhat::HeapStats::get();

    dhat::assert_eq!(before.total_blocks, after.total_blocks);
}
