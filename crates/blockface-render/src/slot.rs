use blockface_mesh_cpu::MeshBuffer;

use crate::{RenderSurface, UploadError};

/// Holds the surface resource currently attached for one mesh.
///
/// `replace` uploads first and releases the previous handle only once the new
/// one exists, so a failed upload leaves the old geometry on screen.
#[derive(Debug)]
pub struct MeshSlot<H> {
    current: Option<H>,
    generation: u64,
}

impl<H> Default for MeshSlot<H> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<H> MeshSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }

    /// Number of successful replacements so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn replace<S>(&mut self, surface: &mut S, mesh: &MeshBuffer) -> Result<(), UploadError>
    where
        S: RenderSurface<Handle = H>,
    {
        let fresh = surface.upload(mesh)?;
        if let Some(old) = self.current.replace(fresh) {
            surface.release(old);
        }
        self.generation += 1;
        log::debug!(
            "mesh slot gen {}: attached {} tris",
            self.generation,
            mesh.triangle_count()
        );
        Ok(())
    }

    /// Releases the attached handle, if any.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface<Handle = H>,
    {
        if let Some(old) = self.current.take() {
            surface.release(old);
        }
    }
}

impl<H> Drop for MeshSlot<H> {
    fn drop(&mut self) {
        if self.current.is_some() {
            log::warn!(
                "mesh slot dropped at gen {} with a live handle; call clear() first",
                self.generation
            );
        }
    }
}
