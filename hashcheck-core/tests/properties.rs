use hashcheck_core::digest::{file_hash, hash_bytes};
use hashcheck_core::{validate_directory, VerifyError};
use proptest::prelude::*;
use std::fs;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn hashing_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let td = tempfile::tempdir().unwrap();
        let p = td.path().join("f.bin");
        fs::write(&p, &data).unwrap();
        let a = file_hash(&p).unwrap();
        let b = file_hash(&p).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), 40);
        prop_assert!(a.bytes().all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
        prop_assert_eq!(a, hash_bytes(&data));
    }

    #[test]
    fn unchanged_files_validate(files in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..512), 1..6)) {
        let td = tempfile::tempdir().unwrap();
        let root = td.path();
        fs::create_dir(root.join("group-01")).unwrap();
        let mut list = String::new();
        for (i, data) in files.iter().enumerate() {
            let name = format!("f{i}.bin");
            fs::write(root.join(&name), data).unwrap();
            list.push_str(&format!("{} {}\n", hash_bytes(data), name));
        }
        fs::write(root.join("group-01/hash_list.txt"), list).unwrap();
        prop_assert!(validate_directory(root).is_ok());
    }

    #[test]
    fn any_single_byte_change_is_caught(
        data in proptest::collection::vec(any::<u8>(), 1..1024),
        idx in any::<prop::sample::Index>(),
        delta in 1u8..=255,
    ) {
        let td = tempfile::tempdir().unwrap();
        let root = td.path();
        fs::create_dir(root.join("group-07")).unwrap();
        fs::write(root.join("group-07/hash_list.txt"), format!("{} target.bin", hash_bytes(&data))).unwrap();
        let mut changed = data.clone();
        let i = idx.index(changed.len());
        changed[i] = changed[i].wrapping_add(delta);
        fs::write(root.join("target.bin"), &changed).unwrap();

        match validate_directory(root) {
            Err(VerifyError::Mismatch(m)) => {
                prop_assert_eq!(m.rel_path, "target.bin");
                prop_assert!(m.manifest.ends_with("group-07/hash_list.txt"));
            }
            other => prop_assert!(false, "expected mismatch, got {:?}", other),
        }
    }
}
