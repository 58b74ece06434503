//! Dart expressions for colors, borders, radii, shadows and padding.

use figflow_core::{
    top_paint, Color, ColorStop, CornerRadius, Effect, NodeKind, Padding, Paint, Point,
    SceneNode, StrokeAlign,
};

use crate::format::{num_to_fixed, WidgetCall};

/// `Color(0xAARRGGBB)`.
pub fn color(color: &Color, opacity: f32) -> String {
    let [a, r, g, b] = color.to_argb8(opacity);
    format!("Color(0x{:02X}{:02X}{:02X}{:02X})", a, r, g, b)
}

/// Color of the topmost visible paint, when it is a solid one.
pub fn solid_color(paints: &[Paint]) -> Option<String> {
    match top_paint(paints) {
        Some(Paint::Solid { color: c, opacity, .. }) => Some(color(c, *opacity)),
        _ => None,
    }
}

pub fn linear_gradient(stops: &[ColorStop], handles: &[Point], opacity: f32) -> String {
    let start = handles.first().copied().unwrap_or(Point::new(0.0, 0.5));
    let end = handles.get(1).copied().unwrap_or(Point::new(1.0, 0.5));

    WidgetCall::new("LinearGradient")
        .arg("begin", alignment(start))
        .arg("end", alignment(end))
        .list(
            "colors",
            stops.iter().map(|s| color(&s.color, opacity)).collect(),
        )
        .list(
            "stops",
            stops.iter().map(|s| num_to_fixed(s.position)).collect(),
        )
        .render()
}

/// Map a unit-square point to Flutter's `-1..1` alignment space.
fn alignment(point: Point) -> String {
    format!(
        "Alignment({}, {})",
        num_to_fixed(point.x * 2.0 - 1.0),
        num_to_fixed(point.y * 2.0 - 1.0)
    )
}

/// `BorderSide` for the topmost solid stroke.
pub fn border_side(node: &SceneNode) -> Option<String> {
    if node.stroke_weight <= 0.0 {
        return None;
    }
    let stroke_color = solid_color(&node.strokes)?;
    let align = match node.stroke_align {
        StrokeAlign::Inside => "BorderSide.strokeAlignInside",
        StrokeAlign::Center => "BorderSide.strokeAlignCenter",
        StrokeAlign::Outside => "BorderSide.strokeAlignOutside",
    };

    Some(
        WidgetCall::new("BorderSide")
            .arg("width", num_to_fixed(node.stroke_weight))
            .arg("strokeAlign", align)
            .arg("color", stroke_color)
            .render(),
    )
}

pub fn border_radius(radius: &CornerRadius) -> Option<String> {
    if radius.is_zero() {
        return None;
    }
    if radius.is_uniform() {
        return Some(format!(
            "BorderRadius.circular({})",
            num_to_fixed(radius.top_left)
        ));
    }

    let corner = |value: f64| {
        (value != 0.0).then(|| format!("Radius.circular({})", num_to_fixed(value)))
    };
    Some(
        WidgetCall::new("BorderRadius.only")
            .arg_opt("topLeft", corner(radius.top_left))
            .arg_opt("topRight", corner(radius.top_right))
            .arg_opt("bottomLeft", corner(radius.bottom_left))
            .arg_opt("bottomRight", corner(radius.bottom_right))
            .render(),
    )
}

/// Outline shape: an oval for ellipses, a rounded rectangle otherwise.
pub fn shape(node: &SceneNode) -> Option<String> {
    let side = border_side(node);

    if node.kind == NodeKind::Ellipse {
        return Some(WidgetCall::new("OvalBorder").arg_opt("side", side).render());
    }

    let radius = border_radius(&node.corner_radius);
    if side.is_none() && radius.is_none() {
        return None;
    }
    Some(
        WidgetCall::new("RoundedRectangleBorder")
            .arg_opt("side", side)
            .arg_opt("borderRadius", radius)
            .render(),
    )
}

/// `BoxShadow`s for visible drop shadows. Inner shadows have no equivalent.
pub fn shadows(node: &SceneNode) -> Vec<String> {
    node.effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::DropShadow(shadow) if shadow.visible => Some(shadow),
            _ => None,
        })
        .map(|shadow| {
            WidgetCall::new("BoxShadow")
                .arg("color", color(&shadow.color, 1.0))
                .arg("blurRadius", num_to_fixed(shadow.radius))
                .arg(
                    "offset",
                    format!(
                        "Offset({}, {})",
                        num_to_fixed(shadow.offset.x),
                        num_to_fixed(shadow.offset.y)
                    ),
                )
                .arg("spreadRadius", num_to_fixed(shadow.spread))
                .render()
        })
        .collect()
}

/// `EdgeInsets` in its most compact form.
pub fn padding(padding: &Padding) -> Option<String> {
    if padding.is_zero() {
        return None;
    }
    let Padding {
        top,
        right,
        bottom,
        left,
    } = *padding;

    if top == right && top == bottom && top == left {
        return Some(format!("const EdgeInsets.all({})", num_to_fixed(top)));
    }

    let non_zero = |value: f64| (value != 0.0).then(|| num_to_fixed(value));
    if top == bottom && left == right {
        return Some(
            WidgetCall::new("const EdgeInsets.symmetric")
                .arg_opt("horizontal", non_zero(left))
                .arg_opt("vertical", non_zero(top))
                .render(),
        );
    }

    Some(
        WidgetCall::new("const EdgeInsets.only")
            .arg_opt("top", non_zero(top))
            .arg_opt("left", non_zero(left))
            .arg_opt("right", non_zero(right))
            .arg_opt("bottom", non_zero(bottom))
            .render(),
    )
}
