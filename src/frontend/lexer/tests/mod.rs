//! Lexer tests module
//!
//! Organized test modules:
//! - basic: 基础测试（空输入、空白符、换行等）
//! - keywords: 关键字与标识符优先级
//! - literals: 数字与字符串常量
//! - operators: 运算符与分隔符
//! - symbols: 符号表驻留
//! - comments: 行注释（可配置）
//! - errors: 错误处理测试
//! - properties: proptest 性质测试
