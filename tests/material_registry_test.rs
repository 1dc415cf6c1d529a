use cgmath::Vector3;
use parlor::resources::material::MaterialRegistry;

#[test]
fn defined_material_resolves_to_its_values() {
    let mut materials = MaterialRegistry::new();
    materials.define("wood", [0.6, 0.3, 0.1], [0.2, 0.2, 0.2], 10.0);

    let wood = materials.resolve("wood").unwrap();
    assert_eq!(wood.tag, "wood");
    assert_eq!(wood.diffuse_color, Vector3::new(0.6, 0.3, 0.1));
    assert_eq!(wood.specular_color, Vector3::new(0.2, 0.2, 0.2));
    assert_eq!(wood.shininess, 10.0);
}

#[test]
fn first_definition_wins() {
    let mut materials = MaterialRegistry::new();
    materials.define("metal", [0.6, 0.6, 0.6], [0.9, 0.9, 0.9], 128.0);
    materials.define("metal", [0.1, 0.1, 0.1], [0.0, 0.0, 0.0], 1.0);

    assert_eq!(materials.len(), 2);
    assert_eq!(materials.resolve("metal").unwrap().shininess, 128.0);
}

#[test]
fn unknown_tag_resolves_to_nothing() {
    let mut materials = MaterialRegistry::new();
    assert!(materials.is_empty());
    assert!(materials.resolve("wood").is_none());

    materials.define("wood", [0.6, 0.3, 0.1], [0.2, 0.2, 0.2], 10.0);
    assert!(materials.resolve("glass").is_none());
}

#[test]
fn resolved_material_is_a_copy() {
    let mut materials = MaterialRegistry::new();
    materials.define("vinyl", [0.2, 0.2, 0.2], [0.7, 0.7, 0.7], 50.0);

    let mut vinyl = materials.resolve("vinyl").unwrap();
    vinyl.shininess = 1.0;
    assert_eq!(materials.resolve("vinyl").unwrap().shininess, 50.0);
}

#[test]
fn iteration_keeps_definition_order() {
    let mut materials = MaterialRegistry::new();
    for tag in ["floor", "white", "pillow"] {
        materials.define(tag, [1.0; 3], [0.5; 3], 20.0);
    }
    let tags: Vec<&str> = materials.iter().map(|m| m.tag.as_str()).collect();
    assert_eq!(tags, vec!["floor", "white", "pillow"]);
}
