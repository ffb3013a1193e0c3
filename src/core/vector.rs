//! Reine 2D-Vektorfunktionen auf `glam::Vec2`.
//!
//! Winkelkonvention (Peilung): 0° zeigt nach oben (−y, Canvas-Koordinaten),
//! Winkel wachsen im Uhrzeigersinn. Wird für Self-Loops und Start-Pfeile genutzt.

use glam::Vec2;

/// Länge eines Vektors.
pub fn length(v: Vec2) -> f32 {
    v.length()
}

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// "Dot-Product"-Variante des Editors: z-Komponente des Kreuzprodukts (`a.x·b.y − b.x·a.y`).
///
/// Vorzeichen entscheidet, auf welcher Seite von `a` der Vektor `b` liegt.
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// Richtungsvektor `b − a`.
pub fn direction(a: Vec2, b: Vec2) -> Vec2 {
    b - a
}

/// Roher Normalenvektor: Richtung `b − a` um 90° gedreht, `(-(b.y − a.y), b.x − a.x)`.
pub fn normal(a: Vec2, b: Vec2) -> Vec2 {
    direction(a, b).perp()
}

/// Normierter Normalenvektor; bei identischen Punkten `Vec2::ZERO` (keine Krümmung).
pub fn unit_normal(a: Vec2, b: Vec2) -> Vec2 {
    normal(a, b).normalize_or_zero()
}

/// Einheitsvektor; `None` bei Länge 0.
pub fn unit(v: Vec2) -> Option<Vec2> {
    v.try_normalize()
}

/// Mittelpunkt der Strecke `a`–`b`.
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Normiert einen Winkel in Grad auf `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid kann bei sehr kleinen negativen Werten exakt 360.0 liefern
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Peilung eines Vektors in Grad (`[0, 360)`); Nullvektor ergibt 0°.
pub fn angle_from_vector(v: Vec2) -> f32 {
    if v == Vec2::ZERO {
        return 0.0;
    }
    wrap_degrees(v.x.atan2(-v.y).to_degrees())
}

/// Einheitsvektor zur Peilung `angle` (Grad).
pub fn vector_from_angle(angle: f32) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Peilung von `origin` nach `point` im vollen Bereich `[0, 360)`.
pub fn angle360(origin: Vec2, point: Vec2) -> f32 {
    angle_from_vector(point - origin)
}

/// Vorzeichenbehafteter Abstand von `point` zur Geraden durch `point_on_line` entlang `direction`.
///
/// Positiv auf der Seite, in die [`normal`] zeigt. Degenerierte Richtung ergibt 0.
pub fn signed_distance_to_line(point: Vec2, direction: Vec2, point_on_line: Vec2) -> f32 {
    let len = direction.length();
    if len <= f32::EPSILON {
        return 0.0;
    }
    cross(direction, point - point_on_line) / len
}

/// Abstand eines Punkts zur Strecke `a`–`b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Rastet `value` auf das nächste Vielfache von `step` ein (nur wenn `enabled`).
pub fn snap(value: f32, step: f32, enabled: bool) -> f32 {
    if !enabled || step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}
