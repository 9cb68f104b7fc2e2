use vr_display::utils;
use vr_display::VrEyeParameters;

/// The drawable target of a sample. Pixel dimensions change only through
/// `resize`; everything else renders at whatever size was last set.
#[derive(Debug, Clone)]
pub struct RenderSurface {
    source_id: u32,
    width: u32,
    height: u32,
    layout_width: u32,
    layout_height: u32,
    device_pixel_ratio: f32,
}

impl RenderSurface {
    /// A surface with zero pixel dimensions. `resize` must be called once
    /// before rendering.
    pub fn new(layout_width: u32, layout_height: u32, device_pixel_ratio: f32) -> RenderSurface {
        RenderSurface {
            source_id: utils::new_id(),
            width: 0,
            height: 0,
            layout_width,
            layout_height,
            device_pixel_ratio,
        }
    }

    /// Handle used to identify this surface as a presentation source.
    pub fn source_id(&self) -> u32 {
        self.source_id
    }

    pub fn set_layout_size(&mut self, width: u32, height: u32) {
        self.layout_width = width;
        self.layout_height = height;
    }

    /// Applies the sizing rule. While presenting the surface must fit both
    /// recommended eye render targets side by side; windowed it tracks the
    /// layout size scaled by the device pixel ratio.
    pub fn resize(&mut self, presenting_eyes: Option<(&VrEyeParameters, &VrEyeParameters)>) {
        match presenting_eyes {
            Some((left, right)) => {
                self.width = 2 * left.render_width.max(right.render_width);
                self.height = left.render_height.max(right.render_height);
            }
            None => {
                self.width = (self.layout_width as f32 * self.device_pixel_ratio) as u32;
                self.height = (self.layout_height as f32 * self.device_pixel_ratio) as u32;
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eye(width: u32, height: u32) -> VrEyeParameters {
        VrEyeParameters {
            render_width: width,
            render_height: height,
            ..Default::default()
        }
    }

    #[test]
    fn windowed_size_scales_layout_by_pixel_ratio() {
        let mut surface = RenderSurface::new(1280, 720, 2.0);
        surface.resize(None);
        assert_eq!(surface.width(), 2560);
        assert_eq!(surface.height(), 1440);
    }

    #[test]
    fn presenting_size_fits_both_eyes_side_by_side() {
        let mut surface = RenderSurface::new(1280, 720, 1.0);
        surface.resize(Some((&eye(1512, 1680), &eye(1512, 1680))));
        assert_eq!(surface.width(), 3024);
        assert_eq!(surface.height(), 1680);
    }

    #[test]
    fn presenting_size_uses_larger_eye_when_asymmetric() {
        let mut surface = RenderSurface::new(1280, 720, 1.0);
        surface.resize(Some((&eye(1000, 1200), &eye(1100, 1080))));
        assert_eq!(surface.width(), 2200);
        assert_eq!(surface.height(), 1200);
    }

    #[test]
    fn resize_is_idempotent_per_state() {
        let mut surface = RenderSurface::new(800, 600, 1.5);
        surface.resize(None);
        let (w, h) = (surface.width(), surface.height());
        surface.resize(None);
        assert_eq!((surface.width(), surface.height()), (w, h));

        surface.resize(Some((&eye(1512, 1680), &eye(1512, 1680))));
        surface.resize(Some((&eye(1512, 1680), &eye(1512, 1680))));
        assert_eq!((surface.width(), surface.height()), (3024, 1680));

        // Returning to windowed restores the layout derived size.
        surface.resize(None);
        assert_eq!((surface.width(), surface.height()), (1200, 900));
    }

    #[test]
    fn layout_changes_apply_on_next_windowed_resize() {
        let mut surface = RenderSurface::new(1280, 720, 1.0);
        surface.resize(None);
        surface.set_layout_size(1920, 1080);
        // Not applied until resize runs.
        assert_eq!(surface.width(), 1280);
        surface.resize(None);
        assert_eq!((surface.width(), surface.height()), (1920, 1080));
    }
}
