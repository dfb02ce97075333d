use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};

use painter3d::prelude::*;
use painter3d::Result;

/// Fly a camera over a flat-shaded triangle mesh.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mesh to load instead of the configured one
    #[arg(short, long, conflicts_with = "cube")]
    mesh: Option<PathBuf>,

    /// Load the mesh with the full OBJ parser (tobj) instead of the v/f reader
    #[arg(long)]
    strict_obj: bool,

    /// Show the built-in spinning cube
    #[arg(long)]
    cube: bool,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Outline every triangle
    #[arg(long)]
    wireframe: bool,
}

/// Spin of the built-in cube in radians per second around X, Y and Z.
const CUBE_SPIN: [f32; 3] = [0.4, 0.4 * std::f32::consts::PI, 0.4 * std::f32::consts::SQRT_2];

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(mesh) = &args.mesh {
        config.mesh.path = mesh.clone();
    }
    if args.wireframe {
        config.render.wireframe = true;
    }
    if args.cube {
        config.mesh.spin = CUBE_SPIN;
        config.camera.position = [-3.0, 0.0, 0.0];
        config.camera.target = [0.0, 0.0, 0.0];
    }
    Ok(config)
}

fn load_mesh(args: &Args, config: &Config) -> Result<Mesh> {
    let mesh = if args.cube {
        Mesh::cube()
    } else if args.strict_obj {
        Mesh::from_obj(&config.mesh.path)?
    } else {
        Mesh::load(&config.mesh.path)?
    };
    Ok(mesh)
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mesh = load_mesh(&args, &config)?;

    let mut window = Window::new(&config.window.title, config.window.width, config.window.height)?;
    let mut engine = Engine::new(&config, mesh, window.width(), window.height())?;
    let mut frame_buffer = FrameBuffer::new(window.width(), window.height());
    let rasterizer = ScanlineRasterizer::new();

    if !config.render.fill && !config.render.wireframe {
        warn!("fill and wireframe are both disabled; drawing filled triangles");
    }
    let mode = RenderMode::from_flags(config.render.fill, config.render.wireframe);
    info!("render mode: {mode}");

    let mut frame_limiter = FrameLimiter::new(&window, config.window.target_fps);

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                frame_buffer.resize(w, h);
                engine.resize(w, h);
            }
            WindowEvent::None => {}
        }

        let delta_time = frame_limiter.wait_and_get_delta(&window);
        let input = window.input_state();

        engine.update(&input, delta_time);
        engine.render(&rasterizer, &mut frame_buffer, mode);
        window.present(&frame_buffer)?;
    }

    Ok(())
}
