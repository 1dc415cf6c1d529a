/**
 * This module contains all logic for loading textures, materials and meshes
 * and for resolving the tags the scene refers to them by.
 */
pub mod decoder;
pub mod material;
pub mod mesh;
pub mod texture;
