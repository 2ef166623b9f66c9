use clap::ValueEnum;

const SEARCH_PROMPT: &str = "你是一个专业的技术搜索助手。用户会询问关于 API、文档、技术问题等。
请提供准确、简洁的答案，包含相关的代码示例和文档链接。
回答使用中文。";

const CONTEXT_PROMPT: &str = "你是一个专业的技术研究助手，擅长处理需要大量上下文的复杂问题。
请提供详细、全面的答案，包含相关的代码示例、最佳实践和文档链接。
回答使用中文。";

const RESEARCH_PROMPT: &str = "你是一个专业的深度研究助手。用户会给你一个领域或问题，你需要：
1. 全面调研该领域/问题的各个方面
2. 提供详尽的研究报告，包括：
   - 概述和背景
   - 核心概念和原理
   - 主要技术/方法/工具
   - 最佳实践和常见陷阱
   - 相关资源和文档链接
   - 实际代码示例（如适用）
3. 确保信息准确、全面、有深度

回答使用中文，格式清晰，便于阅读。";

/// Search preset selecting the remote model and system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fast API/docs search
    Search,
    /// Search that needs a larger context window
    Context,
    /// Deep research report
    Research,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Context => "context",
            Self::Research => "research",
        }
    }

    pub fn model_id(&self) -> &'static str {
        match self {
            Self::Search => "perplexity/sonar-pro-search",
            Self::Context => "perplexity/sonar",
            Self::Research => "perplexity/sonar-deep-research",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Search => "快速 API/文档搜索 (sonar-pro-search)",
            Self::Context => "大上下文搜索 (sonar)",
            Self::Research => "深度研究报告 (sonar-deep-research)",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Search => SEARCH_PROMPT,
            Self::Context => CONTEXT_PROMPT,
            Self::Research => RESEARCH_PROMPT,
        }
    }
}
