use parlor::data_structures::texture::{check_dimensions, max_mip_levels};

const LIMIT: u32 = 8192;

#[test]
fn sizes_within_the_limit_are_accepted() {
    assert!(check_dimensions(1, 1, LIMIT).is_ok());
    assert!(check_dimensions(1024, 512, LIMIT).is_ok());
    assert!(check_dimensions(LIMIT, LIMIT, LIMIT).is_ok());
}

#[test]
fn oversized_sides_are_rejected() {
    let err = check_dimensions(10000, 10, LIMIT).unwrap_err();
    assert!(err.to_string().contains("10000x10"));
    assert!(check_dimensions(10, 10000, LIMIT).is_err());
    assert!(check_dimensions(LIMIT + 1, 1, LIMIT).is_err());
}

#[test]
fn empty_images_are_rejected() {
    assert!(check_dimensions(0, 4, LIMIT).is_err());
    assert!(check_dimensions(4, 0, LIMIT).is_err());
}

#[test]
fn mip_chain_ends_at_one_pixel() {
    assert_eq!(max_mip_levels(1, 1), 1);
    assert_eq!(max_mip_levels(256, 256), 9);
    assert_eq!(max_mip_levels(8192, 1), 14);
}
