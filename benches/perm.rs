use divan::{black_box, Bencher};

use lazyseq::perm::{for_each_permutation, permutations};
use lazyseq::{Seq, CONTINUE};

fn main() {
    divan::main();
}

#[divan::bench(args = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9])]
fn iterative(bencher: Bencher, size: usize) {
    let mut data: Vec<u32> = (0..size as u32).collect();
    bencher.bench_local(move || {
        let mut last = 0;
        let _ = permutations(black_box(&mut data)).drive(|p| {
            last = p.borrow()[0];
            CONTINUE
        });
        last
    });
}

#[divan::bench(args = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9])]
fn recursive(bencher: Bencher, size: usize) {
    let mut data: Vec<u32> = (0..size as u32).collect();
    bencher.bench_local(move || {
        let mut last = 0;
        let _ = for_each_permutation(black_box(&mut data), |p| {
            last = p[0];
            CONTINUE
        });
        last
    });
}
