mod entity;

// 重新导出公共接口
pub use entity::render_entity;
