//! The robot-arm page shell.
//!
//! The kinematics live in the opaque `static/arm.js` asset; this
//! module owns everything the page promises to the outside: the
//! joint table, the keyboard legend, the on-screen button groups
//! with their `data-joint` wiring, and the camera framing passed to
//! the script.

use anyhow::Result;
use ohtml::{att, Html, Node, TryCollectBody};
use serde::Serialize;

use crate::page_context::PageContext;

pub const CANVAS_ID: &str = "arm-canvas";

/// The arm spans x = -1 to about 4.5 in world space; the camera sits
/// offset to x = 1.75 so the whole arm, fingers included, stays in
/// view.
pub const CAMERA_POSITION: [f64; 3] = [1.75, 2.25, 7.0];
pub const CAMERA_TARGET: [f64; 3] = [1.75, 1.0, 0.0];

pub struct Joint {
    pub label: &'static str,
    /// Key for the legend detail class, e.g. "hand" for
    /// "hand-legend-detail".
    pub slug: &'static str,
    /// Value of the `data-joint` attribute wiring buttons and keys
    /// to this joint in the script.
    pub data_joint: &'static str,
    /// Lower-case key moves forward, upper-case back.
    pub key: &'static str,
    pub shift_key: &'static str,
    /// Button labels for the forward and backward direction.
    pub actions: (&'static str, &'static str),
    pub detail: &'static str,
    /// Rotation limits in radians.
    pub limits: (f64, f64),
}

pub const JOINTS: &[Joint] = &[
    Joint {
        label: "Shoulder",
        slug: "shoulder",
        data_joint: "shoulder",
        key: "s",
        shift_key: "S",
        actions: ("Raise", "Lower"),
        detail: "s raises the arm, S lowers it",
        limits: (-0.6, 1.4),
    },
    Joint {
        label: "Elbow",
        slug: "elbow",
        data_joint: "elbow",
        key: "e",
        shift_key: "E",
        actions: ("Bend", "Straighten"),
        detail: "e bends the elbow, E straightens it",
        limits: (0.0, 2.4),
    },
    Joint {
        label: "Wrist",
        slug: "wrist",
        data_joint: "wrist",
        key: "w",
        shift_key: "W",
        actions: ("Twist left", "Twist right"),
        detail: "w twists left, W twists right",
        limits: (-3.1, 3.1),
    },
    Joint {
        label: "Hand (fingers)",
        slug: "hand",
        data_joint: "grab",
        key: "g",
        shift_key: "G",
        actions: ("Close", "Open"),
        detail: "g closes the fingers, G opens them",
        limits: (0.0, 0.85),
    },
];

pub fn arm_main(html: &Html, _ctx: &PageContext) -> Result<Vec<Node>> {
    Ok(vec![
        html.section(
            [att("class", "arm-stage")],
            [html.canvas(
                [
                    att("id", CANVAS_ID),
                    // Focusable, so keyboard input works without a
                    // pointer.
                    att("tabindex", "0"),
                    att("aria-label", "3D robot arm viewport"),
                ],
                [],
            )?],
        )?,
        controls_panel(html)?,
        html.section(
            [att("class", "button-controls")],
            JOINTS
                .iter()
                .map(|joint| joint_buttons(html, joint))
                .try_collect_body()?,
        )?,
    ])
}

fn controls_panel(html: &Html) -> Result<Node> {
    html.section(
        [att("class", "controls-panel")],
        [
            html.h2([], [html.staticstr("Keyboard controls")])?,
            html.ul(
                [],
                JOINTS
                    .iter()
                    .map(|joint| legend_row(html, joint))
                    .try_collect_body()?,
            )?,
        ],
    )
}

fn legend_row(html: &Html, joint: &Joint) -> Result<Node> {
    html.li(
        [],
        [
            html.span([att("class", "control-label")], [html.staticstr(joint.label)])?,
            html.staticstr(" "),
            html.kbd([], [html.staticstr(joint.key)])?,
            html.staticstr(" / "),
            html.kbd([], [html.staticstr(joint.shift_key)])?,
            html.staticstr(" "),
            html.span(
                [att("class", format!("{}-legend-detail", joint.slug))],
                [html.staticstr(joint.detail)],
            )?,
        ],
    )
}

fn joint_buttons(html: &Html, joint: &Joint) -> Result<Node> {
    let button = |label: &'static str, dir: &'static str| {
        html.button(
            [att("data-joint", joint.data_joint), att("data-dir", dir)],
            [html.staticstr(label)],
        )
    };
    html.div(
        [att("class", "joint-control")],
        [
            html.h3([], [html.staticstr(joint.label)])?,
            button(joint.actions.0, "+")?,
            button(joint.actions.1, "-")?,
        ],
    )
}

#[derive(Serialize)]
struct JointConfig {
    joint: &'static str,
    min: f64,
    max: f64,
}

/// Inline bootstrap handing the canvas plus the joint limits to the
/// kinematics script and pinning the camera framing.
pub fn bootstrap_script(html: &Html) -> Result<Node> {
    let limits: Vec<JointConfig> = JOINTS
        .iter()
        .map(|joint| JointConfig {
            joint: joint.data_joint,
            min: joint.limits.0,
            max: joint.limits.1,
        })
        .collect();
    let [x, y, z] = CAMERA_POSITION;
    let [tx, ty, tz] = CAMERA_TARGET;
    let code = format!(
        "import {{ initArm }} from './static/arm.js';\n\
         const arm = initArm(document.getElementById('{canvas}'), {limits});\n\
         arm.camera.position.set({x}, {y}, {z});\n\
         arm.camera.lookAt({tx}, {ty}, {tz});\n\
         arm.start();\n",
        canvas = CANVAS_ID,
        limits = serde_json::to_string(&limits)?,
    );
    html.script([att("type", "module")], [html.preserialized(code)])
}

#[cfg(test)]
mod tests {
    use ohtml::Print;

    use super::*;

    #[test]
    fn t_joint_table() {
        assert_eq!(JOINTS.len(), 4);
        for joint in JOINTS {
            assert_eq!(joint.key.to_uppercase(), joint.shift_key);
            assert!(joint.limits.0 < joint.limits.1);
        }
        let hand = JOINTS.last().unwrap();
        assert_eq!(hand.data_joint, "grab");
        assert_eq!((hand.key, hand.shift_key), ("g", "G"));
    }

    #[test]
    fn t_joint_buttons_wiring() -> Result<()> {
        let html = Html::new();
        let hand = JOINTS.last().unwrap();
        let s = joint_buttons(&html, hand)?.to_html_fragment_string()?;
        assert_eq!(s.matches("data-joint=\"grab\"").count(), 2);
        assert!(s.contains(">Close</button>"));
        assert!(s.contains(">Open</button>"));
        Ok(())
    }

    #[test]
    fn t_bootstrap_script_framing() -> Result<()> {
        let html = Html::new();
        let s = bootstrap_script(&html)?.to_html_fragment_string()?;
        assert!(s.contains("camera.position.set(1.75,"));
        assert!(s.contains("./static/arm.js"));
        // JSON must arrive unescaped in the script body.
        assert!(s.contains("\"joint\":\"grab\""));
        assert!(!s.contains("&quot;"));
        Ok(())
    }
}
