use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    rc::Rc,
};

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use parlor::{
    bridge::ShaderState,
    data_structures::mesh::MeshKind,
    error::DecodeError,
    resources::{
        decoder::{DecodedImage, ImageDecoder, PixelLayout},
        mesh::MeshProvider,
        texture::TextureBackend,
    },
    shader::ShadingProgram,
};

/// A value written through [`ShadingProgram`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Value {
    Mat4(Matrix4<f32>),
    Vec4(Vector4<f32>),
    Vec3(Vector3<f32>),
    Vec2(Vector2<f32>),
    Float(f32),
    Bool(bool),
    Sampler(i32),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Set(String, Value),
    Draw(MeshKind),
}

/// Shading program that remembers every write and draw in call order.
#[derive(Debug, Default)]
pub(crate) struct RecordingProgram {
    pub calls: Vec<Call>,
}

impl RecordingProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_draw(&mut self, kind: MeshKind) {
        self.calls.push(Call::Draw(kind));
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Every (name, value) write, without draws.
    pub fn writes(&self) -> Vec<(&str, &Value)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Set(name, value) => Some((name.as_str(), value)),
                Call::Draw(_) => None,
            })
            .collect()
    }

    pub fn writes_named(&self, name: &str) -> Vec<&Value> {
        self.writes()
            .into_iter()
            .filter(|(n, _)| *n == name)
            .map(|(_, value)| value)
            .collect()
    }

    pub fn draws(&self) -> Vec<MeshKind> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Draw(kind) => Some(*kind),
                Call::Set(..) => None,
            })
            .collect()
    }

    /// The value `name` held when draw number `draw` was issued.
    pub fn value_at_draw(&self, draw: usize, name: &str) -> Option<&Value> {
        let mut current = None;
        let mut seen = 0;
        for call in &self.calls {
            match call {
                Call::Set(n, value) if n == name => current = Some(value),
                Call::Set(..) => (),
                Call::Draw(_) => {
                    if seen == draw {
                        return current;
                    }
                    seen += 1;
                }
            }
        }
        None
    }

    /// Writes issued between draw `draw - 1` and draw `draw`.
    pub fn writes_before_draw(&self, draw: usize) -> Vec<(&str, &Value)> {
        let mut writes = Vec::new();
        let mut seen = 0;
        for call in &self.calls {
            match call {
                Call::Set(name, value) => writes.push((name.as_str(), value)),
                Call::Draw(_) => {
                    if seen == draw {
                        return writes;
                    }
                    seen += 1;
                    writes.clear();
                }
            }
        }
        Vec::new()
    }

    fn set(&mut self, name: &str, value: Value) {
        self.calls.push(Call::Set(name.to_string(), value));
    }
}

impl ShadingProgram for RecordingProgram {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.set(name, Value::Mat4(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.set(name, Value::Vec4(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.set(name, Value::Vec3(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.set(name, Value::Vec2(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.set(name, Value::Float(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.set(name, Value::Bool(value));
    }

    fn set_sampler(&mut self, name: &str, unit: i32) {
        self.set(name, Value::Sampler(unit));
    }
}

/// Decoder serving images from memory.
///
/// Paths without an explicit entry decode to `fallback` if one is set and
/// fail with `NotFound` otherwise.
#[derive(Debug, Default)]
pub(crate) struct FakeDecoder {
    images: HashMap<PathBuf, DecodedImage>,
    failing: HashSet<PathBuf>,
    fallback: Option<DecodedImage>,
    decoded: RefCell<Vec<PathBuf>>,
}

impl FakeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes every path to a small RGB image.
    pub fn any_rgb() -> Self {
        Self {
            fallback: Some(image(2, 2, 3)),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, path: &str, image: DecodedImage) -> Self {
        self.images.insert(PathBuf::from(path), image);
        self
    }

    pub fn with_failure(mut self, path: &str) -> Self {
        self.failing.insert(PathBuf::from(path));
        self
    }

    /// Paths passed to `decode`, in call order.
    pub fn decoded(&self) -> Vec<PathBuf> {
        self.decoded.borrow().clone()
    }
}

impl ImageDecoder for FakeDecoder {
    fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        self.decoded.borrow_mut().push(path.to_path_buf());
        if self.failing.contains(path) {
            return Err(DecodeError::Other(format!("{} is corrupt", path.display())));
        }
        self.images
            .get(path)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| {
                DecodeError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.display().to_string(),
                ))
            })
    }
}

/// A `width` x `height` image with `channels` bytes per pixel.
pub(crate) fn image(width: u32, height: u32, channels: u8) -> DecodedImage {
    DecodedImage {
        pixels: vec![128; (width * height) as usize * channels as usize],
        width,
        height,
        channels,
    }
}

#[derive(Debug, Default)]
pub(crate) struct TextureLog {
    /// (handle, label, layout) per created texture.
    pub created: Vec<(u32, String, PixelLayout)>,
    /// (unit, handle) per bind.
    pub bound: Vec<(u32, u32)>,
    pub released: Vec<u32>,
    /// Current unit assignments, cleared by `unbind_all`.
    pub units: HashMap<u32, u32>,
}

/// Texture backend handing out numbered handles.
///
/// The log is shared so it stays readable after the registry owning the
/// backend is dropped.
#[derive(Debug, Default)]
pub(crate) struct FakeTextures {
    pub log: Rc<RefCell<TextureLog>>,
    next_handle: u32,
    failing_labels: HashSet<String>,
}

impl FakeTextures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_upload(mut self, label: &str) -> Self {
        self.failing_labels.insert(label.to_string());
        self
    }
}

impl TextureBackend for FakeTextures {
    type Handle = u32;

    fn create(
        &mut self,
        _image: &DecodedImage,
        layout: PixelLayout,
        label: &str,
    ) -> anyhow::Result<u32> {
        if self.failing_labels.contains(label) {
            anyhow::bail!("out of video memory");
        }
        let handle = self.next_handle;
        self.next_handle += 1;
        self.log
            .borrow_mut()
            .created
            .push((handle, label.to_string(), layout));
        Ok(handle)
    }

    fn bind(&mut self, unit: u32, handle: &u32) {
        let mut log = self.log.borrow_mut();
        log.bound.push((unit, *handle));
        log.units.insert(unit, *handle);
    }

    fn release(&mut self, handle: u32) {
        self.log.borrow_mut().released.push(handle);
    }

    fn unbind_all(&mut self) {
        self.log.borrow_mut().units.clear();
    }
}

/// Mesh provider that records draws into a [`RecordingProgram`].
#[derive(Debug, Default)]
pub(crate) struct FakeMeshes {
    loaded: Vec<MeshKind>,
    pub load_calls: Vec<MeshKind>,
}

impl FakeMeshes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeshProvider for FakeMeshes {
    type Program = RecordingProgram;

    fn load(&mut self, kind: MeshKind) {
        self.load_calls.push(kind);
        if !self.loaded.contains(&kind) {
            self.loaded.push(kind);
        }
    }

    fn is_loaded(&self, kind: MeshKind) -> bool {
        self.loaded.contains(&kind)
    }

    fn draw(&mut self, kind: MeshKind, state: &mut ShaderState<'_, RecordingProgram>) {
        if self.is_loaded(kind) {
            state.program().record_draw(kind);
        }
    }

    fn resource_count(&self) -> usize {
        self.loaded.len()
    }
}
