use ggez::{
    event::{EventHandler, MouseButton},
    graphics::{Canvas, Color},
    Context, GameError,
};
use log::info;

use crate::{
    board::BoardSnapshot,
    error::GraphicsError,
    input::{ClickHandler, InputDispatcher},
    layout::BoardLayout,
    render::BoardRenderer,
};

/// Top-level event handler: owns the render state for the lifetime of the
/// window and reacts to the event loop. ggez delivers every queued input
/// callback before each `draw`, so a click is always applied to the board
/// before the frame that would show its effect. The graphics device is
/// single-thread-affine; nothing here may be touched from another thread.
pub struct BoardClient<B: BoardSnapshot, H: ClickHandler> {
    renderer: BoardRenderer,
    dispatcher: InputDispatcher<H>,
    board: B,
}

impl<B: BoardSnapshot, H: ClickHandler> BoardClient<B, H> {
    /// Fails with `AssetLoad` or `RenderPrecondition` if either texture is
    /// missing or the sprite sheet does not match the atlas grid. A client
    /// that constructs is fully renderable; a failed construction leaves
    /// nothing behind for the event loop to run.
    pub fn new(
        ctx: &Context,
        layout: BoardLayout,
        board: B,
        handler: H,
    ) -> Result<BoardClient<B, H>, GraphicsError> {
        let renderer = BoardRenderer::new(ctx, layout)?;
        info!("media loaded");
        Ok(BoardClient {
            renderer,
            dispatcher: InputDispatcher::new(handler),
            board,
        })
    }
}

impl<B: BoardSnapshot, H: ClickHandler> EventHandler<GameError> for BoardClient<B, H> {
    fn update(&mut self, _ctx: &mut Context) -> Result<(), GameError> {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<(), GameError> {
        let mut canvas = Canvas::from_frame(ctx, Color::WHITE);
        self.renderer.draw(&mut canvas, &self.board)?;
        canvas.finish(ctx)
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> Result<(), GameError> {
        if button == MouseButton::Left {
            self.dispatcher.dispatch(x, y);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, GameError> {
        info!("Quitting");
        Ok(false)
    }
}
