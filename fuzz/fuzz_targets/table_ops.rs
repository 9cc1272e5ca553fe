#![no_main]
use chained_hash_table::{Key, Table};
use libfuzzer_sys::{
    arbitrary::{Arbitrary, Unstructured},
    fuzz_target,
};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(Key),
    Contains(Key),
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    let Ok(capacity) = <u8 as Arbitrary>::arbitrary(&mut unstructured) else {
        return;
    };
    let capacity = usize::from(capacity);

    let Ok(mut table) = Table::new(capacity) else {
        assert_eq!(0, capacity);
        return;
    };

    // Model: every inserted key, in insertion order
    let mut model: Vec<Key> = Vec::new();

    if let Ok(ops) = <Vec<Op> as Arbitrary>::arbitrary(&mut unstructured) {
        for op in ops {
            match op {
                Op::Insert(key) => {
                    table.insert(key);
                    model.push(key);
                }
                Op::Contains(key) => {
                    assert_eq!(model.contains(&key), table.contains(key));
                }
            }
        }
    }

    assert_eq!(model.len(), table.len());

    for idx in 0..capacity {
        let expected = model
            .iter()
            .copied()
            .filter(|&key| table.bucket_index(key) == idx)
            .collect::<Vec<_>>();

        assert_eq!(expected, table.bucket(idx).unwrap().to_vec());
    }
});
