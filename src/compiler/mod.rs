//! 编译模块：将签名规则编译为可执行的正则
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledCatalog, CompiledLibraryRule, CompiledSignature};
pub use self::compiler::RuleCompiler;
