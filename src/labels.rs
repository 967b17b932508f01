//! Locale-dependent literals written into the ZenTao import file.
//!
//! ZenTao validates imported case type and phase values against its own label
//! set, so a file meant for a Chinese-language ZenTao instance has to carry the
//! Chinese labels verbatim.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// The full set of literals for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    /// Placeholder for a suite without a `name` attribute.
    pub unnamed_module: &'static str,
    /// Name of the worksheet in XLSX output.
    pub sheet_name: &'static str,
    /// Case type written on every record.
    pub case_type: &'static str,
    /// Test phase written on every record.
    pub phase: &'static str,
    /// Legal case type values, declared once per file.
    pub case_type_options: [&'static str; 8],
    /// Legal phase values, declared once per file.
    pub phase_options: [&'static str; 6],
    pub header_module: &'static str,
    pub header_title: &'static str,
    pub header_preconditions: &'static str,
    pub header_steps: &'static str,
    pub header_expected: &'static str,
    pub header_keywords: &'static str,
    pub header_priority: &'static str,
    pub header_case_type: &'static str,
    pub header_phase: &'static str,
    pub header_type_options: &'static str,
    pub header_phase_options: &'static str,
}

static EN: Labels = Labels {
    unnamed_module: "Unnamed Module",
    sheet_name: "Test Cases",
    case_type: "FunctionalTest",
    phase: "FunctionalTestPhase",
    case_type_options: [
        "UnitTest",
        "InterfaceTest",
        "FunctionalTest",
        "DeploymentTest",
        "ConfigurationTest",
        "PerformanceTest",
        "SecurityTest",
        "Other",
    ],
    phase_options: [
        "UnitTestPhase",
        "FunctionalTestPhase",
        "IntegrationTestPhase",
        "SystemTestPhase",
        "SmokeTestPhase",
        "ReleaseVerificationPhase",
    ],
    header_module: "module",
    header_title: "title",
    header_preconditions: "preconditions",
    header_steps: "steps_text",
    header_expected: "expected_text",
    header_keywords: "keywords",
    header_priority: "priority",
    header_case_type: "case_type",
    header_phase: "phase",
    header_type_options: "type_option_list",
    header_phase_options: "phase_option_list",
};

static ZH: Labels = Labels {
    unnamed_module: "未命名模块",
    sheet_name: "测试用例",
    case_type: "功能测试",
    phase: "功能测试阶段",
    case_type_options: [
        "单元测试",
        "接口测试",
        "功能测试",
        "安装部署",
        "配置相关",
        "性能测试",
        "安全相关",
        "其他",
    ],
    phase_options: [
        "单元测试阶段",
        "功能测试阶段",
        "集成测试阶段",
        "系统测试阶段",
        "冒烟测试阶段",
        "版本验证阶段",
    ],
    header_module: "所属模块",
    header_title: "用例名称",
    header_preconditions: "前置条件",
    header_steps: "步骤",
    header_expected: "预期",
    header_keywords: "关键词",
    header_priority: "优先级",
    header_case_type: "用例类型",
    header_phase: "适用阶段",
    header_type_options: "类型可选值列表",
    header_phase_options: "阶段可选值列表",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

impl Labels {
    /// Case type options as a single cell value, one option per line.
    pub fn case_type_option_list(&self) -> String {
        self.case_type_options.join("\n")
    }

    /// Phase options as a single cell value, one option per line.
    pub fn phase_option_list(&self) -> String {
        self.phase_options.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().labels().unnamed_module, "Unnamed Module");
    }

    #[test]
    fn test_option_lists_are_newline_separated() {
        let labels = Locale::En.labels();
        assert_eq!(
            labels.case_type_option_list(),
            "UnitTest\nInterfaceTest\nFunctionalTest\nDeploymentTest\nConfigurationTest\nPerformanceTest\nSecurityTest\nOther"
        );
        assert_eq!(
            labels.phase_option_list(),
            "UnitTestPhase\nFunctionalTestPhase\nIntegrationTestPhase\nSystemTestPhase\nSmokeTestPhase\nReleaseVerificationPhase"
        );
    }

    #[test]
    fn test_static_values_are_legal_options() {
        for locale in [Locale::En, Locale::Zh] {
            let labels = locale.labels();
            assert!(labels.case_type_options.contains(&labels.case_type));
            assert!(labels.phase_options.contains(&labels.phase));
        }
    }

    #[test]
    fn test_chinese_labels() {
        let labels = Locale::Zh.labels();
        assert_eq!(labels.unnamed_module, "未命名模块");
        assert_eq!(labels.case_type, "功能测试");
        assert_eq!(labels.phase, "功能测试阶段");
        assert_eq!(labels.phase_option_list().lines().count(), 6);
    }
}
