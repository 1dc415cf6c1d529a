//! Tagged texture registry.
//!
//! Textures are registered under a tag and receive a slot in load order. The
//! slot is also the texture unit the texture is bound to by
//! [`TextureRegistry::bind_all`], so resolving a tag yields the sampler unit
//! the shader has to read from.

use std::path::Path;

use crate::{
    data_structures::texture::Texture,
    error::TextureError,
    resources::decoder::{DecodedImage, ImageDecoder, PixelLayout},
};

/// Returned by [`TextureRegistry::resolve`] when no entry carries the tag.
pub const NOT_FOUND: i32 = -1;

/// Texture units a WebGPU/GL backend is guaranteed to expose per shader stage.
pub const MAX_TEXTURE_UNITS: usize = 16;

/// GPU side of the registry: creates, binds and releases texture objects.
pub trait TextureBackend {
    type Handle;

    /// Create a texture with repeat wrapping, linear filtering and mipmaps.
    fn create(
        &mut self,
        image: &DecodedImage,
        layout: PixelLayout,
        label: &str,
    ) -> anyhow::Result<Self::Handle>;

    /// Make `handle` the texture sampled through `unit`.
    fn bind(&mut self, unit: u32, handle: &Self::Handle);

    fn release(&mut self, handle: Self::Handle);

    /// Forget every unit assignment made by [`bind`](Self::bind).
    fn unbind_all(&mut self);
}

#[derive(Debug)]
pub struct TextureEntry<H> {
    pub handle: H,
    pub tag: String,
}

/// Ordered, capacity-bounded list of tagged textures.
///
/// Tags are not required to be unique. Every lookup returns the earliest
/// registered entry, later duplicates can never be resolved.
pub struct TextureRegistry<B: TextureBackend> {
    backend: B,
    entries: Vec<TextureEntry<B::Handle>>,
    capacity: usize,
}

impl<B: TextureBackend> TextureRegistry<B> {
    pub fn new(backend: B, capacity: usize) -> Self {
        Self {
            backend,
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Decode `path` and register the result under `tag`.
    ///
    /// Returns the slot of the new entry. On error nothing is registered and
    /// the slot counter does not move.
    pub fn register(
        &mut self,
        decoder: &impl ImageDecoder,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> Result<usize, TextureError> {
        let path = path.as_ref();
        let result = self.try_register(decoder, path, tag);
        match &result {
            Ok(slot) => log::info!("Loaded texture `{}` from {} into slot {}", tag, path.display(), slot),
            Err(e) => log::error!("{}", e),
        }
        result
    }

    fn try_register(
        &mut self,
        decoder: &impl ImageDecoder,
        path: &Path,
        tag: &str,
    ) -> Result<usize, TextureError> {
        if self.entries.len() >= self.capacity {
            return Err(TextureError::CapacityExceeded {
                tag: tag.to_string(),
                capacity: self.capacity,
            });
        }

        let image = decoder.decode(path).map_err(|source| TextureError::Decode {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!(
            "Decoded {}: {}x{}, {} channels",
            path.display(),
            image.width,
            image.height,
            image.channels
        );

        let layout = PixelLayout::from_channels(image.channels).ok_or_else(|| {
            TextureError::UnsupportedChannels {
                path: path.display().to_string(),
                channels: image.channels,
            }
        })?;

        let handle = self
            .backend
            .create(&image, layout, tag)
            .map_err(|e| TextureError::Upload {
                tag: tag.to_string(),
                reason: format!("{e:#}"),
            })?;

        self.entries.push(TextureEntry {
            handle,
            tag: tag.to_string(),
        });
        Ok(self.entries.len() - 1)
    }

    /// Bind every entry to the texture unit equal to its slot.
    pub fn bind_all(&mut self) {
        for (unit, entry) in self.entries.iter().enumerate() {
            self.backend.bind(unit as u32, &entry.handle);
        }
    }

    /// Slot of the first entry tagged `tag`, or [`NOT_FOUND`].
    pub fn resolve(&self, tag: &str) -> i32 {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map_or(NOT_FOUND, |slot| slot as i32)
    }

    /// Handle of the first entry tagged `tag`.
    pub fn find(&self, tag: &str) -> Option<&B::Handle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| &entry.handle)
    }

    /// Release every texture. The registry is empty afterwards and can be
    /// filled again.
    pub fn teardown(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Releasing {} textures", self.entries.len());
        }
        for entry in self.entries.drain(..) {
            self.backend.release(entry.handle);
        }
        self.backend.unbind_all();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[TextureEntry<B::Handle>] {
        &self.entries
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: TextureBackend> Drop for TextureRegistry<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// [`TextureBackend`] that uploads to a WGPU device.
///
/// Binding only records which view belongs to which unit. The views are
/// turned into a bind group by [`bind_group`](Self::bind_group) once all
/// units are assigned, units without a texture get a white placeholder.
#[derive(Debug)]
pub struct WgpuTextureBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    units: Vec<Option<wgpu::TextureView>>,
}

impl WgpuTextureBackend {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            units: vec![None; MAX_TEXTURE_UNITS],
        }
    }

    /// Bind group matching [`texture_units_layout`](crate::pipelines::basic::texture_units_layout).
    pub fn bind_group(&self, layout: &wgpu::BindGroupLayout) -> wgpu::BindGroup {
        let placeholder = Texture::create_placeholder(&self.device, &self.queue);
        let views: Vec<&wgpu::TextureView> = self
            .units
            .iter()
            .map(|unit| unit.as_ref().unwrap_or(&placeholder.view))
            .collect();

        let mut entries: Vec<wgpu::BindGroupEntry> = views
            .iter()
            .enumerate()
            .map(|(unit, view)| wgpu::BindGroupEntry {
                binding: unit as u32,
                resource: wgpu::BindingResource::TextureView(view),
            })
            .collect();
        entries.push(wgpu::BindGroupEntry {
            binding: MAX_TEXTURE_UNITS as u32,
            resource: wgpu::BindingResource::Sampler(&placeholder.sampler),
        });

        self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &entries,
            label: Some("texture_units_bind_group"),
        })
    }
}

impl TextureBackend for WgpuTextureBackend {
    type Handle = Texture;

    fn create(
        &mut self,
        image: &DecodedImage,
        layout: PixelLayout,
        label: &str,
    ) -> anyhow::Result<Texture> {
        Texture::from_decoded(&self.device, &self.queue, image, layout, label)
    }

    fn bind(&mut self, unit: u32, handle: &Texture) {
        match self.units.get_mut(unit as usize) {
            Some(slot) => *slot = Some(handle.view.clone()),
            None => log::warn!(
                "Texture unit {} is outside the {} units the pipeline binds",
                unit,
                MAX_TEXTURE_UNITS
            ),
        }
    }

    fn release(&mut self, handle: Texture) {
        handle.texture.destroy();
    }

    fn unbind_all(&mut self) {
        self.units.fill(None);
    }
}
