//! Host bring-up for the plotter: the board collaborators are simulated and the
//! user is replaced by a script, so every layer from the state machine down to the
//! panel command stream runs on a desktop.

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};
use plotbox_core::{
    app::{PlotterApp, PlotterConfig, TickResult},
    input::{ButtonLatch, InputEvent},
};
use plotbox_hal::{
    indicator::{
        matrix::{AddressableMatrix, ChainOrder},
        rgb::PwmRgb,
    },
    input::panel::PanelInput,
    platform::display::{FrameSink, bring_up},
    render::{FrameRenderer, PlotterRenderer},
};
use ssd1306::{Config as DisplayConfig, FrameBuffer128x64, Ssd1306};

use script::{DEMO_SCRIPT, ScriptStep, parse_script};
use sim::{SimAxis, SimBus, SimChain, SimChannel};

#[path = "main/ascii.rs"]
mod ascii;
#[path = "main/script.rs"]
mod script;
#[path = "main/sim.rs"]
mod sim;

const POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Parser)]
#[command(name = "plotbox", about = "Runs the function plotter against simulated hardware")]
struct Args {
    /// Steps to play: c=confirm i=increment d=decrement u=stick up n=stick down .=idle
    steps: Vec<String>,

    /// Simulated time spent on each step.
    #[arg(long, default_value_t = 400)]
    step_ms: u64,

    /// Print every rendered frame instead of only the last one.
    #[arg(long)]
    all_frames: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let steps = if args.steps.is_empty() {
        parse_script(DEMO_SCRIPT.split_whitespace())
    } else {
        parse_script(args.steps.iter().map(String::as_str))
    };
    let steps = match steps {
        Ok(steps) => steps,
        Err(err) => {
            warn!("script: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = PlotterConfig::default();
    info!(
        "boot: poll={}ms step={}ms steps={} dead_zone={} debounce={}ms cooldown={}ms",
        POLL_INTERVAL_MS,
        args.step_ms,
        steps.len(),
        config.dead_zone,
        config.debounce_ms,
        config.axis_cooldown_ms
    );

    let mut display = Ssd1306::new(SimBus::default(), DisplayConfig::default());
    let mut frame = FrameBuffer128x64::new();
    if let Err(err) = bring_up(&mut display, &mut frame) {
        warn!("display: bring-up failed err={err:?}");
        return ExitCode::FAILURE;
    }
    info!("display: ready addr={:#04x}", display.config().address);

    let latch = ButtonLatch::new();
    let axis = SimAxis::default();
    let input = PanelInput::new(&latch, axis.clone());
    let matrix = AddressableMatrix::new(SimChain::default(), ChainOrder::default());
    let rgb = PwmRgb::new(
        SimChannel::new("red"),
        SimChannel::new("green"),
        SimChannel::new("blue"),
    );
    let mut app = PlotterApp::new(input, matrix, rgb, config);
    let mut renderer = PlotterRenderer::new();

    let mut now_ms = 0u64;
    let mut rendered = 0usize;
    let mut display_fault_logged = false;

    for (index, step) in steps.iter().copied().enumerate() {
        debug!("script: step={} action={:?} now={}ms", index + 1, step, now_ms);
        match step {
            ScriptStep::Confirm => latch.notify(InputEvent::Confirm),
            ScriptStep::Increment => latch.notify(InputEvent::Increment),
            ScriptStep::Decrement => latch.notify(InputEvent::Decrement),
            ScriptStep::StickUp => axis.deflect(SimAxis::FULL_UP),
            ScriptStep::StickDown => axis.deflect(SimAxis::FULL_DOWN),
            ScriptStep::Idle => {}
        }

        let step_end_ms = now_ms + args.step_ms;
        while now_ms < step_end_ms {
            if app.tick(now_ms) == TickResult::RenderRequested {
                app.with_screen(|screen| renderer.render(screen, &mut frame));
                rendered += 1;
                if let Err(err) = display.present(&frame) {
                    if !display_fault_logged {
                        warn!("display: flush failed err={err:?}");
                        display_fault_logged = true;
                    }
                }
                info!(
                    "frame: n={} screen={} lit={}",
                    rendered,
                    app.screen_kind().label(),
                    frame.count_on()
                );
                if args.all_frames {
                    print!("{}", ascii::frame_to_ascii(&frame));
                }
            }
            now_ms += POLL_INTERVAL_MS;
        }
        axis.center();
    }

    if !args.all_frames {
        print!("{}", ascii::frame_to_ascii(&frame));
    }
    if let Err(err) = display.set_display_on(false) {
        warn!("display: power-off failed err={err:?}");
    }
    info!(
        "done: frames={} screen={} function={} zoom={:.2}",
        rendered,
        app.screen_kind().label(),
        app.selected_function().name(),
        app.plot_state().zoom()
    );

    ExitCode::SUCCESS
}
