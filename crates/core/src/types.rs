/// List-item identifiers (`character_id`, `image_id`) are plain integers
/// assigned at creation time. They are display labels, not stable keys:
/// after a removal the next append can reuse an id.
pub type ElementId = i64;
