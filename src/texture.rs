use ggez::{
    glam::Vec2,
    graphics::{Canvas, DrawParam, Image, Rect},
    Context,
};

use crate::error::GraphicsError;

/// A device-bound image. Construction loads and decodes the file, so a
/// `Texture` that exists is always renderable; dropping it releases the
/// device resource. Never move one between graphics contexts.
pub struct Texture {
    image: Image,
}

impl Texture {
    pub fn load(ctx: &Context, path: &str) -> Result<Texture, GraphicsError> {
        let image = Image::from_path(ctx, path).map_err(|source| GraphicsError::AssetLoad {
            path: path.to_string(),
            source,
        })?;
        Ok(Texture { image })
    }

    pub fn width(&self) -> f32 {
        self.image.width() as f32
    }

    pub fn height(&self) -> f32 {
        self.image.height() as f32
    }

    /// Draws the whole image, or just `source` (in pixels) when given, with
    /// its top-left corner at `dest`.
    pub fn draw(&self, canvas: &mut Canvas, dest: Vec2, source: Option<Rect>) {
        let mut param = DrawParam::default().dest(dest);
        if let Some(px) = source {
            // ggez source rects are fractions of the image, not pixels
            param = param.src(Rect::new(
                px.x / self.width(),
                px.y / self.height(),
                px.w / self.width(),
                px.h / self.height(),
            ));
        }
        canvas.draw(&self.image, param);
    }
}
