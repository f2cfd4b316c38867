//! Static role profiles and skill buckets

/// A named group of related domain keywords
#[derive(Debug, Clone, Copy)]
pub struct SkillBucket {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// A job role with hard requirements, soft signals and favoured buckets
#[derive(Debug, Clone, Copy)]
pub struct RoleProfile {
    pub name: &'static str,
    pub must: &'static [&'static str],
    pub nice: &'static [&'static str],
    pub category_bias: &'static [&'static str],
}

pub const SKILL_BUCKETS: &[SkillBucket] = &[
    // Software
    SkillBucket {
        name: "Frontend",
        keywords: &["react", "javascript", "typescript", "nextjs", "next.js", "redux", "tailwind", "css", "html", "ui", "frontend", "vite"],
    },
    SkillBucket {
        name: "Backend",
        keywords: &["node", "nodejs", "express", "fastapi", "django", "flask", "rest", "api", "backend", "auth", "jwt"],
    },
    SkillBucket {
        name: "Databases",
        keywords: &["sql", "mysql", "postgres", "postgresql", "mongodb", "database", "redis"],
    },
    SkillBucket {
        name: "Cloud/DevOps",
        keywords: &["aws", "azure", "gcp", "docker", "kubernetes", "ci", "cd", "cicd", "devops", "linux"],
    },
    SkillBucket {
        name: "Testing",
        keywords: &["testing", "jest", "cypress", "selenium", "unit", "integration", "pytest", "qa"],
    },
    SkillBucket {
        name: "Data",
        keywords: &["pandas", "numpy", "python", "excel", "powerbi", "tableau", "statistics", "dashboard", "etl"],
    },
    // Hardware / Embedded / Networks
    SkillBucket {
        name: "Embedded",
        keywords: &["embedded", "firmware", "microcontroller", "mcu", "rtos", "arm", "stm32", "esp32", "uart", "spi", "i2c", "jtag", "bare-metal"],
    },
    SkillBucket {
        name: "IoT",
        keywords: &["iot", "mqtt", "sensors", "edge", "aws iot", "azure iot"],
    },
    SkillBucket {
        name: "VLSI/RTL",
        keywords: &["vlsi", "rtl", "verilog", "systemverilog", "fpga", "timing", "synthesis", "simulation", "tcl"],
    },
    SkillBucket {
        name: "Networking",
        keywords: &["tcp", "ip", "tcp/ip", "routing", "switching", "dns", "dhcp", "firewall", "wireshark", "osi"],
    },
];

pub const ROLE_PROFILES: &[RoleProfile] = &[
    RoleProfile {
        name: "Frontend Developer (React)",
        must: &["react", "javascript", "css", "html"],
        nice: &["typescript", "tailwind", "redux", "testing", "jest", "cypress", "accessibility"],
        category_bias: &["Frontend", "Testing"],
    },
    RoleProfile {
        name: "Backend Developer (API)",
        must: &["api", "rest"],
        nice: &["fastapi", "node", "express", "jwt", "sql", "postgresql", "redis", "testing"],
        category_bias: &["Backend", "Databases", "Testing"],
    },
    RoleProfile {
        name: "Full Stack Developer",
        must: &["react", "api"],
        nice: &["node", "fastapi", "sql", "postgresql", "docker", "aws", "typescript"],
        category_bias: &["Frontend", "Backend", "Databases", "Cloud/DevOps"],
    },
    RoleProfile {
        name: "Data Analyst",
        must: &["sql", "excel"],
        nice: &["python", "pandas", "powerbi", "tableau", "dashboard", "statistics"],
        category_bias: &["Data", "Databases"],
    },
    RoleProfile {
        name: "QA / Test Engineer",
        must: &["testing"],
        nice: &["cypress", "selenium", "jest", "api", "postman", "ci", "automation"],
        category_bias: &["Testing", "Backend"],
    },
    RoleProfile {
        name: "DevOps / Cloud Intern",
        must: &["docker", "linux"],
        nice: &["aws", "ci", "cd", "kubernetes", "monitoring", "devops"],
        category_bias: &["Cloud/DevOps"],
    },
    RoleProfile {
        name: "Embedded Systems Engineer",
        must: &["c", "embedded"],
        nice: &["rtos", "arm", "uart", "spi", "i2c", "jtag", "firmware"],
        category_bias: &["Embedded"],
    },
    RoleProfile {
        name: "IoT Engineer",
        must: &["iot"],
        nice: &["mqtt", "embedded", "sensors", "esp32", "aws iot", "python"],
        category_bias: &["IoT", "Embedded", "Cloud/DevOps"],
    },
    RoleProfile {
        name: "VLSI / RTL Engineer (Entry)",
        must: &["verilog"],
        nice: &["systemverilog", "rtl", "fpga", "timing", "simulation", "tcl", "synthesis"],
        category_bias: &["VLSI/RTL"],
    },
    RoleProfile {
        name: "Network Engineer (Entry)",
        must: &["tcp", "ip"],
        nice: &["routing", "switching", "dns", "dhcp", "wireshark", "linux"],
        category_bias: &["Networking", "Cloud/DevOps"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(ROLE_PROFILES.len(), 10);
        assert_eq!(SKILL_BUCKETS.len(), 10);
    }

    #[test]
    fn test_role_biases_reference_known_buckets() {
        let buckets: HashSet<&str> = SKILL_BUCKETS.iter().map(|b| b.name).collect();
        for role in ROLE_PROFILES {
            for bias in role.category_bias {
                assert!(buckets.contains(bias), "{} refers to unknown bucket {}", role.name, bias);
            }
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        let all = ROLE_PROFILES
            .iter()
            .flat_map(|r| r.must.iter().chain(r.nice.iter()))
            .chain(SKILL_BUCKETS.iter().flat_map(|b| b.keywords.iter()));
        for keyword in all {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }
}
