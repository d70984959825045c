//! Headless session: builds every screen, drives a short scripted
//! interaction on each and prints the resulting model state.
//!
//! Usage: `vector_addition_demo [query]`, e.g.
//! `vector_addition_demo "polarSnapDistance=0.5&animateBackSpeed=40"`.

use anyhow::{Context, Result};
use vector_addition::angles::to_fixed;
use vector_addition::config;
use vector_addition::{
    ComponentVectorStyle, CoordinateSnapMode, EquationType, Scene, ScreenKind, ScreenModel,
    Vector2, VectorAdditionConfig, VectorRef, VectorSetId, ViewToggles,
};

const SET: VectorSetId = VectorSetId::new(0);
const FRAME: f64 = 1.0 / 60.0;

fn main() -> Result<()> {
    let query = std::env::args().nth(1).unwrap_or_default();
    let parsed = VectorAdditionConfig::from_query_string(&query)
        .with_context(|| format!("invalid query parameters: {query:?}"))?;
    config::init(parsed).context("installing configuration")?;
    let config = config::global();

    for kind in ScreenKind::ALL {
        let mut screen = ScreenModel::for_kind(kind, config)
            .with_context(|| format!("building {kind} screen"))?;
        println!("=== {kind} ===");
        run_script(&mut screen).with_context(|| format!("scripted session on {kind}"))?;

        for key in screen.scene_keys().collect::<Vec<_>>() {
            let scene = screen.scene_mut(key)?;
            print_scene(scene)?;
            for event in scene.drain_events() {
                println!("    {event}");
            }
        }
        for event in screen.drain_events() {
            println!("  {event}");
        }
        println!();
    }
    Ok(())
}

fn run_script(screen: &mut ScreenModel) -> Result<()> {
    match screen.kind() {
        ScreenKind::Explore1D => {
            let scene = screen.current_scene_mut()?;
            scene.place_vector(SET, Vector2::new(-10.0, 0.0))?;
            let (b, _) = scene.place_vector(SET, Vector2::new(0.0, 0.0))?;
            scene.drag_tip_to(SET, b, Vector2::new(-3.0, 2.0))?;
        }
        ScreenKind::Explore2D => {
            screen.set_component_style(ComponentVectorStyle::Triangle);
            let scene = screen.current_scene_mut()?;
            let (_, c) = scene.find("c").context("toolbox vector 'c'")?;
            let toolbox = scene.vector_set(SET)?.toolbox_position();
            scene.take_from_toolbox(SET, c, toolbox)?;
            scene.drag_to(SET, c, Vector2::new(20.0, 10.0))?;
            scene.drop_vector(SET, c)?;
            // drag 'a' off the edge; it heads back to the toolbox
            let (_, a) = scene.find("a").context("vector 'a'")?;
            scene.begin_drag(SET, a)?;
            scene.drag_to(SET, a, Vector2::new(58.0, 30.0))?;
            scene.drop_vector(SET, a)?;
            settle(scene);
            screen.select_snap_mode(CoordinateSnapMode::Polar)?;
        }
        ScreenKind::Lab => {
            let scene = screen.current_scene_mut()?;
            for x in [0.0, 10.0, 20.0] {
                scene.place_vector(SET, Vector2::new(x, 0.0))?;
            }
            scene.place_vector(VectorSetId::new(1), Vector2::new(0.0, 20.0))?;
            scene.move_origin(Vector2::new(5.0, 5.0))?;
        }
        ScreenKind::Equations => {
            screen.set_toggle(ViewToggles::BASE_VECTORS, true);
            let scene = screen.current_scene_mut()?;
            let (_, a) = scene.find("a").context("equation vector 'a'")?;
            scene.set_coefficient(SET, a, 2)?;
            scene.set_equation_type(SET, EquationType::Subtraction)?;
            screen.select_snap_mode(CoordinateSnapMode::Polar)?;
            let scene = screen.current_scene_mut()?;
            let (_, d) = scene.find("d").context("equation vector 'd'")?;
            scene.set_base_angle(SET, d, 135.0)?;
            scene.set_equation_type(SET, EquationType::Negation)?;
        }
    }
    Ok(())
}

/// Run frames until every return animation has finished
fn settle(scene: &mut Scene) {
    let returning = |scene: &Scene| {
        scene.graph().vector_sets().iter().any(|set| {
            set.vectors()
                .any(|(_, v)| v.animate_back_target().is_some())
        })
    };
    while returning(&*scene) {
        scene.step(FRAME);
    }
}

fn print_scene(scene: &Scene) -> Result<()> {
    let graph = scene.graph();
    println!("  [{}] bounds {}", scene.name(), graph.bounds());
    for set in graph.vector_sets() {
        println!("    {} ({}, {})", set.id(), set.snap_mode(), set.equation_type());
        for (id, vector) in set.active_vectors() {
            println!(
                "      {id} {:<3} tail {} components {} |v| {:.2} angle {}",
                vector.symbol().unwrap_or("-"),
                vector.tail_position(),
                vector.xy_components(),
                vector.magnitude(),
                format_angle(vector.angle_degrees()),
            );
        }
        let sum = set.get(VectorRef::Sum)?;
        if set.sum_is_defined() {
            println!(
                "      sum {:<3} tail {} components {} |v| {:.2} angle {}",
                sum.symbol().unwrap_or("-"),
                sum.tail_position(),
                sum.xy_components(),
                sum.magnitude(),
                format_angle(sum.angle_degrees()),
            );
        } else {
            println!("      sum undefined");
        }
    }
    Ok(())
}

fn format_angle(angle: Option<f64>) -> String {
    angle.map_or_else(|| "undefined".to_string(), |a| format!("{}°", to_fixed(a, 1)))
}
