//! Jewelry try-on demo
//!
//! Runs the engine against a synthetic face tracker: a head that sways
//! side to side with a little sensor jitter, publishing landmark frames
//! the way a camera pipeline would. The demo installs a procedural
//! pendant, swaps to earrings partway through, and simulates the face
//! leaving the frame, logging what the session does at each step.
//!
//! Usage:
//!   tryon-demo                 # Run with default tuning
//!   tryon-demo engine.toml     # Load tuning from a TOML file

use std::env;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use facet_ar::anchor::Category;
use facet_ar::asset::{JewelryAsset, MeshGeometry};
use facet_ar::landmark::{indices, FramePublisher, LandmarkFrame, LANDMARK_COUNT};
use facet_ar::scene::{PoseNode, Rig};
use facet_ar::session::{ManualAdjust, TrackingStatus, TryOnSession};
use facet_ar::spatial::Point3;
use facet_ar::{frame_feed, EngineConfig};

/// Build one synthetic landmark frame for a head swaying at time `t`
fn synthetic_frame(t: f32, rng: &mut impl Rng) -> LandmarkFrame {
    let sway = 0.05 * (t * 0.8).sin();
    let nod = 0.02 * (t * 1.3).sin();

    let mut slots = vec![Some(Point3::new(0.5 + sway, 0.5 + nod, 0.1)); LANDMARK_COUNT];
    let anchors = [
        (indices::CHIN, 0.5, 0.8, 0.1),
        (indices::JAW_LEFT, 0.3, 0.6, 0.15),
        (indices::JAW_RIGHT, 0.7, 0.6, 0.15),
        (indices::NOSE_TIP, 0.5, 0.55, 0.05),
        (indices::NOSE_BRIDGE, 0.5, 0.45, 0.12),
    ];
    for (idx, x, y, z) in anchors {
        slots[idx] = Some(Point3::new(
            x + sway + rng.gen_range(-0.002..0.002),
            y + nod + rng.gen_range(-0.002..0.002),
            z + rng.gen_range(-0.002..0.002),
        ));
    }
    LandmarkFrame::from_slots(slots)
}

/// Procedural pendant: a small octahedron, the kind of stand-in mesh a
/// catalog loader would hand back
fn pendant_mesh() -> MeshGeometry {
    MeshGeometry::new(
        vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(0.0, -1.0, 0.0),
        ],
        vec![
            0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1, 5, 2, 1, 5, 3, 2, 5, 4, 3, 5, 1, 4,
        ],
    )
}

fn load_asset(category: Category, config: &EngineConfig, source: &str) -> JewelryAsset {
    JewelryAsset::normalized(pendant_mesh(), category, None, None, &config.sizing, source)
}

/// Drive the synthetic tracker at ~30 fps, with a two-second dropout in
/// the middle where the face leaves the frame
async fn run_tracker(publisher: FramePublisher) {
    let mut rng = StdRng::from_entropy();
    let mut t = 0.0f32;
    loop {
        if (6.0..8.0).contains(&t) {
            publisher.publish_no_face();
        } else {
            publisher.publish(synthetic_frame(t, &mut rng));
        }
        t += 1.0 / 30.0;
        tokio::time::sleep(Duration::from_millis(33)).await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let (publisher, receiver) = frame_feed();
    tokio::spawn(run_tracker(publisher));

    let mut session = TryOnSession::new(config.clone(), receiver);
    let mut rig: Rig<PoseNode> = Rig::default();

    let ticket = session.request_asset("demo://pendant");
    session.install_asset(ticket, load_asset(Category::Necklace, &config, "demo://pendant"));

    let mut ticks = 0u32;
    let mut interval = tokio::time::interval(Duration::from_millis(16));
    loop {
        interval.tick().await;
        let status = session.tick(&mut rig);
        ticks += 1;

        if ticks % 60 == 0 {
            let pose = rig.main.pose;
            info!(
                ?status,
                visibility = ?session.visibility(),
                x = pose.position.x,
                y = pose.position.y,
                scale = pose.scale,
                occluder = session.occlusion().is_primed(),
                "tick"
            );
        }

        // Swap to earrings after five seconds, with a size tweak.
        if ticks == 300 {
            let ticket = session.request_asset("demo://hoops");
            session.install_asset(ticket, load_asset(Category::Earring, &config, "demo://hoops"));
            session.set_adjust(ManualAdjust {
                scale_multiplier: 1.5,
                ..ManualAdjust::default()
            });
        }

        if status == TrackingStatus::NoFace && ticks % 60 == 0 {
            info!("face lost, holding last pose");
        }

        if ticks >= 720 {
            break;
        }
    }

    info!("demo complete");
    Ok(())
}
