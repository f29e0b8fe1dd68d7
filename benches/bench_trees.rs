use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordered_trees::{AvlTree, BinarySearchTree, OrderedTree, RedBlackTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_OF_OPERATIONS: usize = 1_000;

fn keys() -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS).map(|_| rng.gen::<u32>()).collect()
}

macro_rules! tree_benches {
    ($($insert:ident, $find:ident, $remove:ident: $type_name:ident$(,)*)*) => {
        $(
            fn $insert(c: &mut Criterion) {
                let keys = keys();
                c.bench_function(concat!("bench ", stringify!($type_name), " insert"), |b| {
                    b.iter(|| {
                        let mut tree = $type_name::new();
                        for key in &keys {
                            tree.insert(*key);
                        }
                        tree
                    })
                });
            }

            fn $find(c: &mut Criterion) {
                let keys = keys();
                let tree: $type_name<u32> = keys.iter().cloned().collect();
                c.bench_function(concat!("bench ", stringify!($type_name), " find"), |b| {
                    b.iter(|| {
                        for key in &keys {
                            black_box(tree.contains(key));
                        }
                    })
                });
            }

            fn $remove(c: &mut Criterion) {
                let keys = keys();
                c.bench_function(concat!("bench ", stringify!($type_name), " remove"), |b| {
                    b.iter_batched(
                        || keys.iter().cloned().collect::<$type_name<u32>>(),
                        |mut tree| {
                            for key in &keys {
                                black_box(tree.remove(key));
                            }
                        },
                        criterion::BatchSize::SmallInput,
                    )
                });
            }
        )*
    };
}

tree_benches! {
    bench_bst_insert, bench_bst_find, bench_bst_remove: BinarySearchTree,
    bench_avl_insert, bench_avl_find, bench_avl_remove: AvlTree,
    bench_red_black_insert, bench_red_black_find, bench_red_black_remove: RedBlackTree,
}

criterion_group!(
    benches,
    bench_bst_insert,
    bench_bst_find,
    bench_bst_remove,
    bench_avl_insert,
    bench_avl_find,
    bench_avl_remove,
    bench_red_black_insert,
    bench_red_black_find,
    bench_red_black_remove,
);
criterion_main!(benches);
