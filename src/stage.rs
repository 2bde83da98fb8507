use crate::renderer::CanvasRenderer;
use crate::world::World;

/// World plus its canvas renderer — everything a frame needs short of a
/// window. Kept headless so the frame path is testable without a display.
pub struct Stage {
    pub world: World,
    pub renderer: CanvasRenderer,
}

impl Stage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            world: World::new(width, height),
            renderer: CanvasRenderer::new(width, height),
        }
    }

    /// Fill `slot` on first use and leave it alone afterwards. The winit
    /// `resumed` callback can fire more than once; scene construction
    /// must not.
    pub fn init_once(slot: &mut Option<Stage>, width: u32, height: u32) -> &mut Stage {
        slot.get_or_insert_with(|| Stage::new(width, height))
    }

    /// Advance the simulation one tick, render, and hand back the pixels
    pub fn frame(&mut self) -> &[u8] {
        self.world.advance();
        self.renderer.render(&self.world.scene, &self.world.camera);
        self.renderer.pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_once_constructs_a_single_stage() {
        let mut slot: Option<Stage> = None;

        {
            let stage = Stage::init_once(&mut slot, 400, 300);
            stage.world.advance();
        }

        // a second "resumed" must not rebuild the scene
        let stage = Stage::init_once(&mut slot, 400, 300);
        assert!(stage.world.cube().rotation.x > 0.0);
        assert_eq!(stage.world.scene.len(), 2);
    }

    #[test]
    fn frame_returns_full_buffer() {
        let mut stage = Stage::new(400, 300);
        let pixels = stage.frame();
        assert_eq!(pixels.len(), 400 * 300 * 4);
    }
}
