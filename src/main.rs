use clap::Parser;
use log::{error, info, warn};

use lightfan::camera::Camera;
use lightfan::controller::RenderController;
use lightfan::interaction::{DragState, PointerEvent};
use lightfan::output::save_image_as_png;
use lightfan::overlay::composite;
use lightfan::scene::Scene;
use lightfan::vector::Vec2;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Press on the first point, drag through the rest, then release.
fn replay_drag(controller: &mut RenderController, points: &[Vec2]) {
    let Some((&first, rest)) = points.split_first() else {
        return;
    };

    controller.handle_pointer(PointerEvent::Down(first));
    if rest.is_empty() {
        info!("Pointer pressed at {first:?} with no drag");
    } else if controller.drag_state() == DragState::Idle {
        warn!(
            "Pointer at {:?} missed the light glyph at {:?}; drag ignored",
            first,
            controller.frame().glyph
        );
    }

    for &point in rest {
        controller.handle_pointer(PointerEvent::Move(point));
    }
    controller.handle_pointer(PointerEvent::Up);
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("lightfan - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}", args.width, args.height);

    let camera = match Camera::new(args.width, args.height) {
        Ok(camera) => camera,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut controller = match RenderController::new(camera, Scene::with_light_at(args.light)) {
        Ok(controller) => controller,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    replay_drag(&mut controller, &args.drag);

    let frame = controller.frame();
    info!(
        "Light at {:?}, {} rays drawn",
        controller.light().position,
        frame.rays.len()
    );

    let image = if args.no_overlay {
        frame.pixels.clone()
    } else {
        composite(frame)
    };

    if save_image_as_png(&image, &args.output).is_err() {
        std::process::exit(1);
    }
}
