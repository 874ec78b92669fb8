//! View Model Projection
//!
//! [`render`] is a pure function of the shell's state. Renderers never read
//! the simulation directly; they draw whatever the returned [`ViewModel`]
//! says, once per frame, after [`Shell::frame`](crate::Shell::frame).

use serde::Serialize;

use crate::animation::PresencePhase;
use crate::physics::{BodyId, Position, BODY_COUNT};
use crate::shell::Shell;
use crate::theme::{Palette, ThemeCatalog, ThemeId};
use crate::view::ViewMode;

/// Scale applied to a hovered sphere
pub const HOVER_SCALE: f64 = 1.05;

/// Scale applied to a pressed sphere
pub const PRESS_SCALE: f64 = 0.95;

/// Extra scale the overview grows to while exiting
const OVERVIEW_EXIT_SCALE: f64 = 1.5;

/// Blur the overview reaches while exiting
const OVERVIEW_EXIT_BLUR: f64 = 20.0;

/// Vertical offset the detail pane slides in from
const DETAIL_ENTER_OFFSET: f64 = 50.0;

/// How a whole layer is composited this frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayerStyle {
    /// 0.0 = invisible, 1.0 = opaque
    pub opacity: f64,
    /// Multiplier on top of any content scale
    pub extra_scale: f64,
    /// Blur radius
    pub blur: f64,
    /// Downward offset
    pub offset_y: f64,
}

impl LayerStyle {
    /// Fully present, untransformed
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        extra_scale: 1.0,
        blur: 0.0,
        offset_y: 0.0,
    };
}

/// One sphere in the overview
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SphereModel {
    /// Body slot
    pub id: BodyId,
    /// Theme shown on this sphere
    pub theme: ThemeId,
    /// Label
    pub title: &'static str,
    /// Colors
    pub palette: Palette,
    /// Center in simulation units, before the overview scale
    pub position: Position,
    /// Pointer feedback multiplier (hover/press)
    pub scale_factor: f64,
}

/// The overview layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OverviewModel {
    /// Current zoom scale applied to the whole sphere group
    pub scale: f64,
    /// Sphere diameter in simulation units
    pub diameter: f64,
    /// Layer compositing
    pub style: LayerStyle,
    /// The three spheres, in body order
    pub spheres: [SphereModel; BODY_COUNT],
}

/// The detail layer for one theme
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailModel {
    /// Theme being shown
    pub theme: ThemeId,
    /// Theme title
    pub title: &'static str,
    /// Colors
    pub palette: Palette,
    /// Heading of the main pane
    pub pane_title: String,
    /// Label on the back control
    pub back_label: &'static str,
    /// Left rail label
    pub level_nav_label: &'static str,
    /// Right rail label
    pub history_label: &'static str,
    /// Number of markers on the history rail
    pub history_markers: usize,
    /// Bottom-left corner label
    pub conditions_label: &'static str,
    /// Bottom-right corner label
    pub study_tools_label: &'static str,
    /// Bottom bar label
    pub theme_nav_label: &'static str,
    /// Layer compositing
    pub style: LayerStyle,
}

impl DetailModel {
    /// Static content of the detail pane for `theme`
    #[must_use]
    pub fn for_theme(theme: ThemeId, style: LayerStyle) -> Self {
        let definition = ThemeCatalog::get(theme);
        Self {
            theme,
            title: definition.title,
            palette: definition.palette,
            pane_title: format!("{} Pane", definition.title),
            back_label: "← Back to Platform",
            level_nav_label: "Vertical Navigation (Levels)",
            history_label: "History Bridge / \"The Path\"",
            history_markers: 2,
            conditions_label: "Conditions",
            study_tools_label: "Study Tools",
            theme_nav_label: "Horizontal Navigation (Themes within levels)",
            style,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewModel {
    /// Current mode
    pub mode: ViewMode,
    /// Selected theme, if any
    pub selection: Option<ThemeId>,
    /// Current zoom scale
    pub scale: f64,
    /// Overview layer, while present or exiting
    pub overview: Option<OverviewModel>,
    /// Detail layer, while present or exiting
    pub detail: Option<DetailModel>,
}

/// Project the shell's state into a [`ViewModel`]
#[must_use]
pub fn render(shell: &Shell) -> ViewModel {
    let scale = shell.scale();

    let overview = shell.overview_presence().is_visible().then(|| {
        let presence = shell.overview_presence();
        let amount = presence.amount();
        let style = if presence.phase() == PresencePhase::Exiting {
            let gone = 1.0 - amount;
            LayerStyle {
                opacity: amount,
                extra_scale: 1.0 + (OVERVIEW_EXIT_SCALE - 1.0) * gone,
                blur: OVERVIEW_EXIT_BLUR * gone,
                offset_y: 0.0,
            }
        } else {
            LayerStyle {
                opacity: amount,
                ..LayerStyle::SETTLED
            }
        };

        let spheres = BodyId::ALL.map(|id| {
            let theme = ThemeId::ALL[id.index()];
            let definition = ThemeCatalog::get(theme);
            SphereModel {
                id,
                theme,
                title: definition.title,
                palette: definition.palette,
                position: shell.integrator().position(id),
                scale_factor: sphere_scale(shell, id),
            }
        });

        OverviewModel {
            scale,
            diameter: shell.integrator().threshold(),
            style,
            spheres,
        }
    });

    let detail = if shell.detail_presence().is_visible() {
        shell.shown_theme().map(|theme| {
            let amount = shell.detail_presence().amount();
            let style = LayerStyle {
                opacity: amount,
                offset_y: DETAIL_ENTER_OFFSET * (1.0 - amount),
                ..LayerStyle::SETTLED
            };
            DetailModel::for_theme(theme, style)
        })
    } else {
        None
    };

    ViewModel {
        mode: shell.mode(),
        selection: shell.selection(),
        scale,
        overview,
        detail,
    }
}

fn sphere_scale(shell: &Shell, id: BodyId) -> f64 {
    if shell.pressed() == Some(id) {
        PRESS_SCALE
    } else if shell.hovered() == Some(id) {
        HOVER_SCALE
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::events::{PointerEvent, ShellEvent};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const DT: f64 = 1.0 / 60.0;

    fn settled_shell() -> Shell {
        let mut shell = Shell::new(ShellConfig::default()).unwrap();
        for _ in 0..60 {
            shell.frame(DT).unwrap();
        }
        shell
    }

    #[test]
    fn test_initial_overview_fades_in() {
        let shell = Shell::new(ShellConfig::default()).unwrap();
        let model = render(&shell);

        assert_eq!(model.mode, ViewMode::Overview);
        assert!(model.detail.is_none());
        let overview = model.overview.unwrap();
        assert!(overview.style.opacity.abs() < f64::EPSILON);
        assert!((overview.scale - 0.6).abs() < f64::EPSILON);
        assert!((overview.diameter - 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spheres_follow_theme_order() {
        let model = render(&settled_shell());
        let overview = model.overview.unwrap();

        let themes: Vec<ThemeId> = overview.spheres.iter().map(|s| s.theme).collect();
        assert_eq!(themes, ThemeId::ALL.to_vec());
        assert_eq!(overview.spheres[1].title, "Systems");
        assert_eq!(overview.style, LayerStyle::SETTLED);
    }

    #[test]
    fn test_pointer_feedback_scale() {
        let mut shell = settled_shell();
        shell.pointer(PointerEvent::Hover(BodyId::new(0)));
        let overview = render(&shell).overview.unwrap();
        assert!((overview.spheres[0].scale_factor - HOVER_SCALE).abs() < f64::EPSILON);
        assert!((overview.spheres[1].scale_factor - 1.0).abs() < f64::EPSILON);

        // Press wins over hover
        shell.pointer(PointerEvent::Press(BodyId::ALL[0]));
        let overview = render(&shell).overview.unwrap();
        assert!((overview.spheres[0].scale_factor - PRESS_SCALE).abs() < f64::EPSILON);

        shell.pointer(PointerEvent::Release);
        let overview = render(&shell).overview.unwrap();
        assert!((overview.spheres[0].scale_factor - HOVER_SCALE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detail_content() {
        let mut shell = settled_shell();
        shell.enqueue(ShellEvent::Select(ThemeId::Terminology));
        shell.frame(DT).unwrap();

        let detail = render(&shell).detail.unwrap();
        assert_eq!(detail.theme, ThemeId::Terminology);
        assert_eq!(detail.pane_title, "Terminology Pane");
        assert_eq!(detail.back_label, "← Back to Platform");
        assert_eq!(detail.history_markers, 2);
        assert_eq!(
            detail.theme_nav_label,
            "Horizontal Navigation (Themes within levels)"
        );
        // Just started entering
        assert!(detail.style.opacity < 0.5);
        assert!(detail.style.offset_y > 25.0);
    }

    #[test]
    fn test_overview_exit_pose() {
        let mut shell = settled_shell();
        shell.enqueue(ShellEvent::Select(ThemeId::Systems));
        shell.frame(DT).unwrap();
        // Halfway through the exit
        for _ in 0..9 {
            shell.frame(DT).unwrap();
        }

        let model = render(&shell);
        let overview = model.overview.unwrap();
        assert!(overview.style.opacity > 0.0 && overview.style.opacity < 1.0);
        assert!(overview.style.extra_scale > 1.0 && overview.style.extra_scale < 1.5);
        assert!(overview.style.blur > 0.0 && overview.style.blur < 20.0);
        assert!(model.detail.is_some(), "both layers draw during the crossfade");

        for _ in 0..30 {
            shell.frame(DT).unwrap();
        }
        let model = render(&shell);
        assert!(model.overview.is_none());
        assert_eq!(model.detail.unwrap().style, LayerStyle::SETTLED);
    }

    #[test]
    fn test_detail_survives_exit_when_selection_is_cleared() {
        let mut config = ShellConfig::default();
        config.clear_selection_on_back = true;
        let mut shell = Shell::new(config).unwrap();
        shell.enqueue(ShellEvent::Select(ThemeId::Organization));
        shell.frame(DT).unwrap();
        for _ in 0..30 {
            shell.frame(DT).unwrap();
        }

        shell.enqueue(ShellEvent::Back);
        shell.frame(DT).unwrap();
        let model = render(&shell);
        assert_eq!(model.selection, None);
        // Still fading out with its theme
        assert_eq!(model.detail.unwrap().theme, ThemeId::Organization);
    }

    #[test]
    fn test_instant_transitions() {
        let mut config = ShellConfig::default();
        config.transition.duration = Duration::ZERO;
        let mut shell = Shell::new(config).unwrap();
        assert_eq!(render(&shell).overview.unwrap().style, LayerStyle::SETTLED);

        shell.enqueue(ShellEvent::Select(ThemeId::Systems));
        shell.frame(DT).unwrap();
        let model = render(&shell);
        assert!(model.overview.is_none());
        assert_eq!(model.detail.unwrap().style, LayerStyle::SETTLED);
    }

    #[test]
    fn test_view_model_json() {
        let model = render(&settled_shell());
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["mode"], "overview");
        assert!(json["selection"].is_null());
        assert_eq!(json["overview"]["spheres"][2]["theme"], "Terminology");
        assert!(json["detail"].is_null());
    }
}
