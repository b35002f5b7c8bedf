//! Network basics toolbox.
//!
//! Stateless helpers for everyday networking questions. These tools touch
//! no device, so they live in a plain [`ToolBox`] rather than a pool.

use std::error::Error;
use std::net::IpAddr;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use crate::netllm::tool_schema::{ArgumentKind, ToolArgument, ToolSpec};
use crate::netllm::toolbox::ToolBox;
use crate::netllm::tools::oui::OUI_VENDORS;

/// Build the `network_basics` toolbox.
pub fn network_basics_toolbox() -> ToolBox {
    let mut toolbox = ToolBox::new(
        "network_basics",
        "A collection of functions for basic networking tasks.",
    );

    toolbox.register(
        ToolSpec::new("lookup_oui")
            .with_description(
                "Look up the OUI (Organizationally Unique Identifier) vendor for a list of MAC addresses.",
            )
            .with_argument(
                ToolArgument::new(
                    "mac_addresses",
                    ArgumentKind::Array(Box::new(ToolArgument::new(
                        "mac_address",
                        ArgumentKind::String,
                    ))),
                )
                .required(),
            ),
        Arc::new(|params| {
            Box::pin(async move {
                let macs = params
                    .get("mac_addresses")
                    .and_then(|v| v.as_array())
                    .cloned()
                    .unwrap_or_default();
                let mut output = String::new();
                for mac in macs.iter().filter_map(|v| v.as_str()) {
                    let normalized = mac
                        .replace(':', "")
                        .replace('-', "")
                        .replace('.', "")
                        .to_lowercase();
                    let vendor = normalized
                        .get(..6)
                        .and_then(|oui| OUI_VENDORS.get(oui))
                        .copied()
                        .unwrap_or("Unknown");
                    output.push_str(&format!("{} - {}\n", normalized, vendor));
                }
                Ok(Some(output))
            })
        }),
    );

    toolbox.register(
        ToolSpec::new("dns_lookup")
            .with_description("Perform a reverse DNS (PTR) lookup on a list of IP addresses.")
            .with_argument(
                ToolArgument::new(
                    "ip_addresses",
                    ArgumentKind::Array(Box::new(ToolArgument::new(
                        "ip_address",
                        ArgumentKind::String,
                    ))),
                )
                .required(),
            ),
        Arc::new(|params| {
            Box::pin(async move {
                let ips = params
                    .get("ip_addresses")
                    .and_then(|v| v.as_array())
                    .cloned()
                    .unwrap_or_default();
                let mut output = String::new();
                for ip in ips.iter().filter_map(|v| v.as_str()) {
                    // One bad address must not spoil the rest of the list.
                    match reverse_dns(ip).await {
                        Ok(name) => output.push_str(&format!("{} - {}\n", ip, name)),
                        Err(err) => output.push_str(&format!("{} - {}\n", ip, err)),
                    }
                }
                Ok(Some(output))
            })
        }),
    );

    toolbox
}

/// Resolve the PTR name for one address.
async fn reverse_dns(ip: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    let addr: IpAddr = ip.parse()?;
    let resolver = TokioAsyncResolver::tokio_from_system_conf()?;
    let response = resolver.reverse_lookup(addr).await?;
    Ok(response
        .iter()
        .next()
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("no PTR records for {}", addr)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_oui_handles_separators_and_unknowns() {
        let toolbox = network_basics_toolbox();

        let reply = toolbox
            .invoke(
                "lookup_oui",
                serde_json::json!({
                    "mac_addresses": ["B8:27:EB:12:34:56", "b827.eb00.0001", "ff-ff-ff-00-00-00"]
                }),
            )
            .await
            .unwrap()
            .unwrap();

        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "b827eb123456 - Raspberry Pi Foundation");
        assert_eq!(lines[1], "b827eb000001 - Raspberry Pi Foundation");
        assert_eq!(lines[2], "ffffff000000 - Unknown");
    }

    #[tokio::test]
    async fn test_dns_lookup_folds_per_address_errors_into_output() {
        let toolbox = network_basics_toolbox();

        let reply = toolbox
            .invoke(
                "dns_lookup",
                serde_json::json!({"ip_addresses": ["not-an-ip"]}),
            )
            .await
            .unwrap()
            .unwrap();

        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("not-an-ip - "));
        assert!(lines[0].contains("invalid IP"));
    }

    #[test]
    fn test_toolbox_exports_schemas_in_registration_order() {
        let toolbox = network_basics_toolbox();
        let docs = toolbox.export_schema();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["function"]["name"], "lookup_oui");
        assert_eq!(docs[1]["function"]["name"], "dns_lookup");
        assert_eq!(
            docs[0]["function"]["parameters"]["properties"]["mac_addresses"]["type"],
            "array"
        );
        assert_eq!(
            docs[1]["function"]["parameters"]["properties"]["ip_addresses"]["items"]["type"],
            "string"
        );
    }
}
