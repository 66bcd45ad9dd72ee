/*!
# `EQUALS <number> <number>`

## Purpose
A condition that is true when both numbers are the same.

## Remarks
Only numbers can be compared.

## Example
```text
1 IF EQUALS 4 SUM 2 2 JUMP 3
2 SAY "NOT REACHED"
3 SAY "FOUR"
4 END
```

*/
