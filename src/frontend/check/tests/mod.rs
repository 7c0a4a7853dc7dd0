
const NAT: &str = "nat : Type. Z : nat. S : nat -> nat. plus : nat -> nat -> nat.";
