//! Built-in OUI (Organizationally Unique Identifier) vendor table.
//!
//! A small table of well-known IEEE OUI assignments, keyed by the first six
//! lowercase hex digits of a MAC address.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// OUI prefix (lowercase, no separators) to vendor name.
    pub static ref OUI_VENDORS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("00000c", "Cisco Systems, Inc");
        m.insert("000142", "Cisco Systems, Inc");
        m.insert("0001c7", "Cisco Systems, Inc");
        m.insert("00179a", "D-Link Corporation");
        m.insert("001b63", "Apple, Inc.");
        m.insert("001cf0", "D-Link Corporation");
        m.insert("002272", "American Micro-Fuel Device Corp.");
        m.insert("0023ab", "Cisco Systems, Inc");
        m.insert("005056", "VMware, Inc.");
        m.insert("00e04c", "Realtek Semiconductor Corp.");
        m.insert("086ac5", "Intel Corporate");
        m.insert("14dda9", "ASUSTek COMPUTER INC.");
        m.insert("18fd74", "Ubiquiti Inc");
        m.insert("244bfe", "ASUSTek COMPUTER INC.");
        m.insert("2c3361", "Apple, Inc.");
        m.insert("3c5282", "Hewlett Packard");
        m.insert("4ccc6a", "Micro-Star INTL CO., LTD.");
        m.insert("5254ab", "TP-Link Corporation Limited");
        m.insert("687f74", "Cisco-Linksys, LLC");
        m.insert("74ac5f", "Qiku Internet Network Scientific (Shenzhen) Co., Ltd");
        m.insert("7486e2", "Cisco Systems, Inc");
        m.insert("8c1645", "LCFC(HeFei) Electronics Technology Co., Ltd");
        m.insert("98fa9b", "LCFC(HeFei) Electronics Technology Co., Ltd");
        m.insert("a0cec8", "MERCURY CORPORATION");
        m.insert("b827eb", "Raspberry Pi Foundation");
        m.insert("bc2411", "Cisco Systems, Inc");
        m.insert("d05099", "ASRock Incorporation");
        m.insert("dca632", "Raspberry Pi Trading Ltd");
        m.insert("ec086b", "TP-LINK TECHNOLOGIES CO.,LTD.");
        m.insert("f4ce46", "Hewlett Packard");
        m
    };
}
