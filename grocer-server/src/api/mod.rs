//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 存活探针和数据库诊断
//! - [`seed`] - 演示数据引导接口
//! - [`products`] - 商品列表接口
//! - [`slots`] - 取货时段列表接口
//! - [`orders`] - 下单接口

pub mod health;
pub mod seed;

// Data models API
pub mod orders;
pub mod products;
pub mod slots;
