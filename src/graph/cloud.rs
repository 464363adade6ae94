use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("unknown cloud '{0}': expected one of public, gcc, gcchigh, china, dod, ex, rx")]
pub struct UnknownCloud(pub String);

/// Microsoft national / sovereign cloud the provider talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cloud {
    #[default]
    Public,
    Gcc,
    GccHigh,
    China,
    Dod,
    Ex,
    Rx,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudEndpoints {
    pub authority_url: &'static str,
    pub api_scope: &'static str,
    pub graph_service_root: &'static str,
    pub graph_beta_service_root: &'static str,
}

impl Cloud {
    pub fn endpoints(&self) -> CloudEndpoints {
        match self {
            // GCC tenants use the commercial Graph endpoints.
            Cloud::Public | Cloud::Gcc => CloudEndpoints {
                authority_url: "https://login.microsoftonline.com/",
                api_scope: "https://graph.microsoft.com/.default",
                graph_service_root: "https://graph.microsoft.com/v1.0",
                graph_beta_service_root: "https://graph.microsoft.com/beta",
            },
            Cloud::GccHigh => CloudEndpoints {
                authority_url: "https://login.microsoftonline.us/",
                api_scope: "https://graph.microsoft.us/.default",
                graph_service_root: "https://graph.microsoft.us/v1.0",
                graph_beta_service_root: "https://graph.microsoft.us/beta",
            },
            Cloud::Dod => CloudEndpoints {
                authority_url: "https://login.microsoftonline.us/",
                api_scope: "https://dod-graph.microsoft.us/.default",
                graph_service_root: "https://dod-graph.microsoft.us/v1.0",
                graph_beta_service_root: "https://dod-graph.microsoft.us/beta",
            },
            Cloud::China => CloudEndpoints {
                authority_url: "https://login.chinacloudapi.cn/",
                api_scope: "https://microsoftgraph.chinacloudapi.cn/.default",
                graph_service_root: "https://microsoftgraph.chinacloudapi.cn/v1.0",
                graph_beta_service_root: "https://microsoftgraph.chinacloudapi.cn/beta",
            },
            Cloud::Ex => CloudEndpoints {
                authority_url: "https://login.microsoftonline.eaglex.ic.gov/",
                api_scope: "https://graph.eaglex.ic.gov/.default",
                graph_service_root: "https://graph.eaglex.ic.gov/v1.0",
                graph_beta_service_root: "https://graph.eaglex.ic.gov/beta",
            },
            Cloud::Rx => CloudEndpoints {
                authority_url: "https://login.microsoftonline.microsoft.scloud/",
                api_scope: "https://graph.microsoft.scloud/.default",
                graph_service_root: "https://graph.microsoft.scloud/v1.0",
                graph_beta_service_root: "https://graph.microsoft.scloud/beta",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cloud::Public => "public",
            Cloud::Gcc => "gcc",
            Cloud::GccHigh => "gcchigh",
            Cloud::China => "china",
            Cloud::Dod => "dod",
            Cloud::Ex => "ex",
            Cloud::Rx => "rx",
        }
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cloud {
    type Err = UnknownCloud;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Cloud::Public),
            "gcc" => Ok(Cloud::Gcc),
            "gcchigh" => Ok(Cloud::GccHigh),
            "china" => Ok(Cloud::China),
            "dod" => Ok(Cloud::Dod),
            "ex" => Ok(Cloud::Ex),
            "rx" => Ok(Cloud::Rx),
            _ => Err(UnknownCloud(s.to_string())),
        }
    }
}
